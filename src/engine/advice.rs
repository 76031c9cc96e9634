use crate::types::input::{Carrier, NeedType, ProjectInput, ProjectType};
use crate::types::policy::AdviceBounds;
use crate::types::result::Decision;

pub const CONTRACT: &str = "签约：在入驻协议中明确企业注册园区、经济效益考核、厂房不可转租/分割，建立项目跟踪与服务机制，确保业务按约导入并投产达效。";
pub const DUAL_TRACK: &str = "产业港项目：产发公司采取“双同步”推进——推进载体建设（征收→设计→施工→验收），并同步匹配地块/厂房与企业需求，防止“签约不落地”。";
pub const STATISTICS: &str =
    "经济服务局做好项目经济指标跟踪与入统指导，确保达条件后及时纳入统计范围。";
pub const SYNERGY: &str =
    "协同发展：产发公司与经济服务局协同做好企业服务与培育，围绕补链环节开展上下游对接。";
pub const LAND: &str = "土地要素：与企业对接土地收储、摘牌等工作；协助办理环评、消防、安评等，确保建设与生产合法合规。";

pub fn advice_for(input: &ProjectInput, decision: Decision, bounds: &AdviceBounds) -> Vec<String> {
    let custom_built = input.need_type == NeedType::IndustrialHarbour
        || input.carrier == Carrier::IndustrialHarbour;
    let reportable = input.expected_annual_tax >= bounds.statistics_tax
        || input.expected_output >= bounds.statistics_output;
    let fills_chain = !input.chain_segment_fill.trim().is_empty();
    let needs_land =
        input.project_type == ProjectType::Land || input.need_type == NeedType::BuyLand;

    [
        (decision != Decision::Defer, CONTRACT),
        (custom_built, DUAL_TRACK),
        (reportable, STATISTICS),
        (fills_chain, SYNERGY),
        (needs_land, LAND),
    ]
    .into_iter()
    .filter(|(applies, _)| *applies)
    .map(|(_, text)| text.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_input() -> ProjectInput {
        ProjectInput {
            project_type: ProjectType::ExistingNoPolicy,
            ..ProjectInput::default()
        }
    }

    #[test]
    fn contract_advice_only_when_not_rejected() {
        let bounds = AdviceBounds::default();
        let input = quiet_input();
        assert_eq!(advice_for(&input, Decision::Approve, &bounds), vec![CONTRACT]);
        assert_eq!(advice_for(&input, Decision::Conditional, &bounds), vec![CONTRACT]);
        assert!(advice_for(&input, Decision::Defer, &bounds).is_empty());
    }

    #[test]
    fn every_gate_can_fire_in_fixed_order() {
        let input = ProjectInput {
            project_type: ProjectType::Land,
            carrier: Carrier::IndustrialHarbour,
            expected_output: 20_000.0,
            chain_segment_fill: "关键零部件加工".to_string(),
            ..ProjectInput::default()
        };
        let advice = advice_for(&input, Decision::Approve, &AdviceBounds::default());
        assert_eq!(advice, vec![CONTRACT, DUAL_TRACK, STATISTICS, SYNERGY, LAND]);
    }

    #[test]
    fn buy_land_need_triggers_land_advice() {
        let input = ProjectInput {
            need_type: NeedType::BuyLand,
            ..quiet_input()
        };
        let advice = advice_for(&input, Decision::Defer, &AdviceBounds::default());
        assert_eq!(advice, vec![LAND]);
    }

    #[test]
    fn statistics_bound_is_inclusive_on_tax() {
        let input = ProjectInput {
            expected_annual_tax: 2_000.0,
            ..quiet_input()
        };
        let advice = advice_for(&input, Decision::Defer, &AdviceBounds::default());
        assert_eq!(advice, vec![STATISTICS]);
    }
}
