use crate::types::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    LowAltitude,
    Services,
    #[default]
    Equipment,
}

impl Industry {
    pub fn label(self) -> &'static str {
        match self {
            Self::LowAltitude => "低空经济",
            Self::Services => "服务类",
            Self::Equipment => "装备制造类",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    Land,
    ExistingNoPolicy,
    OwnFactoryWithPolicy,
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Land => "征地项目",
            Self::ExistingNoPolicy => "购买/租赁园区或社会现房（无需政策）",
            Self::OwnFactoryWithPolicy => "购买园区自有厂房（需政策）",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedType {
    #[default]
    Buy,
    Rent,
    IndustrialHarbour,
    BuyLand,
}

impl NeedType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "购买厂房",
            Self::Rent => "租赁厂房",
            Self::IndustrialHarbour => "产业港定制建设",
            Self::BuyLand => "购买土地",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Carrier {
    #[default]
    ScienceValley,
    IndustrialHarbour,
    Social,
}

impl Carrier {
    pub fn label(self) -> &'static str {
        match self {
            Self::ScienceValley => "园区自有科创谷厂房",
            Self::IndustrialHarbour => "产业港厂房",
            Self::Social => "社会现房",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainMaturity {
    Complete,
    #[default]
    Mature,
    Average,
}

impl ChainMaturity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Complete => "完善",
            Self::Mature => "成熟",
            Self::Average => "一般",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Innovation {
    Strong,
    #[default]
    FairlyStrong,
    Average,
}

impl Innovation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Strong => "强",
            Self::FairlyStrong => "较强",
            Self::Average => "一般",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStability {
    #[default]
    Stable,
    Average,
    Unstable,
}

impl CustomerStability {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "稳定",
            Self::Average => "一般",
            Self::Unstable => "不稳定",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketBase {
    #[default]
    Solid,
    Average,
    Weak,
}

impl MarketBase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "扎实",
            Self::Average => "一般",
            Self::Weak => "较弱",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryTrend {
    #[default]
    Improving,
    Flat,
    UnderPressure,
}

impl IndustryTrend {
    pub fn label(self) -> &'static str {
        match self {
            Self::Improving => "向好",
            Self::Flat => "平稳",
            Self::UnderPressure => "承压",
        }
    }
}

/// Facts about one candidate project as entered by the screening officer.
///
/// Amounts are in units of 10k CNY, land in mu and floor area in square
/// metres. `*_y2` is the year before last, `*_y1` last year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInput {
    #[serde(deserialize_with = "lenient::text")]
    pub project_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub locate: String,
    #[serde(deserialize_with = "lenient::choice")]
    pub project_type: ProjectType,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub land_mu: f64,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub building_area: f64,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub floor_ratio: f64,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub invest_total: f64,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub expected_output: f64,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub expected_annual_tax: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub expected_jobs: u32,
    #[serde(deserialize_with = "lenient::text")]
    pub intro_content: String,

    #[serde(deserialize_with = "lenient::choice")]
    pub industry: Industry,
    #[serde(deserialize_with = "lenient::text")]
    pub company_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub established_year: String,
    #[serde(deserialize_with = "lenient::text")]
    pub registered_at: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub registered_in_district: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub import_business: String,
    #[serde(deserialize_with = "lenient::text")]
    pub new_business: String,

    #[serde(deserialize_with = "lenient::choice")]
    pub need_type: NeedType,
    #[serde(deserialize_with = "lenient::choice")]
    pub carrier: Carrier,
    #[serde(deserialize_with = "lenient::text")]
    pub tech_titles: String,
    #[serde(deserialize_with = "lenient::choice")]
    pub chain_maturity: ChainMaturity,
    #[serde(deserialize_with = "lenient::choice")]
    pub innovation: Innovation,
    #[serde(deserialize_with = "lenient::choice")]
    pub customer_stability: CustomerStability,
    #[serde(deserialize_with = "lenient::choice")]
    pub market_base: MarketBase,
    #[serde(deserialize_with = "lenient::text")]
    pub chain_segment_fill: String,

    #[serde(deserialize_with = "lenient::non_negative")]
    pub revenue_y2: f64,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub revenue_y1: f64,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub tax_y2: f64,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub tax_y1: f64,
    #[serde(deserialize_with = "lenient::signed")]
    pub profit_y2: f64,
    #[serde(deserialize_with = "lenient::signed")]
    pub profit_y1: f64,
    #[serde(deserialize_with = "lenient::choice")]
    pub industry_trend: IndustryTrend,
    #[serde(deserialize_with = "lenient::count")]
    pub stable_years: u32,
    #[serde(deserialize_with = "lenient::flag")]
    pub credit_ready: bool,

    #[serde(deserialize_with = "lenient::flag")]
    pub risk_dishonest: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub risk_env: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub risk_illegal_land: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub risk_license_missing: bool,

    #[serde(deserialize_with = "lenient::flag")]
    pub intent_agree: bool,
}

impl Default for ProjectInput {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            locate: String::new(),
            project_type: ProjectType::default(),
            land_mu: 0.0,
            building_area: 0.0,
            floor_ratio: 0.0,
            invest_total: 0.0,
            expected_output: 0.0,
            expected_annual_tax: 0.0,
            expected_jobs: 0,
            intro_content: String::new(),
            industry: Industry::default(),
            company_name: String::new(),
            established_year: String::new(),
            registered_at: String::new(),
            registered_in_district: true,
            import_business: String::new(),
            new_business: String::new(),
            need_type: NeedType::default(),
            carrier: Carrier::default(),
            tech_titles: String::new(),
            chain_maturity: ChainMaturity::default(),
            innovation: Innovation::default(),
            customer_stability: CustomerStability::default(),
            market_base: MarketBase::default(),
            chain_segment_fill: String::new(),
            revenue_y2: 0.0,
            revenue_y1: 0.0,
            tax_y2: 0.0,
            tax_y1: 0.0,
            profit_y2: 0.0,
            profit_y1: 0.0,
            industry_trend: IndustryTrend::default(),
            stable_years: 0,
            credit_ready: false,
            risk_dishonest: false,
            risk_env: false,
            risk_illegal_land: false,
            risk_license_missing: false,
            intent_agree: true,
        }
    }
}

impl ProjectInput {
    pub fn sample() -> Self {
        Self {
            project_name: "高端装备制造项目".to_string(),
            locate: "栾城区科创谷/产业港".to_string(),
            land_mu: 30.0,
            invest_total: 10000.0,
            expected_output: 20000.0,
            expected_annual_tax: 1500.0,
            expected_jobs: 200,
            intro_content: "新建高精度机加工产线与装配线".to_string(),
            company_name: "某装备制造有限公司".to_string(),
            established_year: "2016".to_string(),
            registered_at: "石家庄市栾城区".to_string(),
            import_business: "核心零部件制造与总装".to_string(),
            tech_titles: "省级专精特新、小巨人".to_string(),
            chain_segment_fill: "关键零部件加工".to_string(),
            revenue_y2: 18000.0,
            revenue_y1: 22000.0,
            tax_y2: 1100.0,
            tax_y1: 1300.0,
            profit_y2: 900.0,
            profit_y1: 1200.0,
            stable_years: 8,
            ..Self::default()
        }
    }

    // Records built in code skip the file decoders; profit may stay negative.
    pub fn normalized(&self) -> Self {
        Self {
            land_mu: lenient::non_negative_value(self.land_mu),
            building_area: lenient::non_negative_value(self.building_area),
            floor_ratio: lenient::non_negative_value(self.floor_ratio),
            invest_total: lenient::non_negative_value(self.invest_total),
            expected_output: lenient::non_negative_value(self.expected_output),
            expected_annual_tax: lenient::non_negative_value(self.expected_annual_tax),
            revenue_y2: lenient::non_negative_value(self.revenue_y2),
            revenue_y1: lenient::non_negative_value(self.revenue_y1),
            tax_y2: lenient::non_negative_value(self.tax_y2),
            tax_y1: lenient::non_negative_value(self.tax_y1),
            profit_y2: lenient::signed_value(self.profit_y2),
            profit_y1: lenient::signed_value(self.profit_y1),
            ..self.clone()
        }
    }
}
