use crate::types::input::ProjectInput;

pub const DISHONEST: &str = "失信被执行/严重信用风险";
pub const ENVIRONMENTAL: &str = "重大环保/安监处罚未结";
pub const ILLEGAL_LAND: &str = "违法违规用地";
pub const LICENSE_MISSING: &str = "核心资质缺失且短期不可补齐";

pub fn veto_reasons(input: &ProjectInput) -> Vec<&'static str> {
    [
        (input.risk_dishonest, DISHONEST),
        (input.risk_env, ENVIRONMENTAL),
        (input.risk_illegal_land, ILLEGAL_LAND),
        (input.risk_license_missing, LICENSE_MISSING),
    ]
    .into_iter()
    .filter_map(|(raised, reason)| raised.then_some(reason))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_has_no_veto() {
        assert!(veto_reasons(&ProjectInput::default()).is_empty());
    }

    #[test]
    fn reasons_keep_flag_order() {
        let input = ProjectInput {
            risk_license_missing: true,
            risk_dishonest: true,
            risk_illegal_land: true,
            ..ProjectInput::default()
        };
        assert_eq!(
            veto_reasons(&input),
            vec![DISHONEST, ILLEGAL_LAND, LICENSE_MISSING]
        );
    }
}
