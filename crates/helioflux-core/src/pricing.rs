//! Cost calculator arithmetic.

use crate::constants::{
    BULK_DISCOUNT_MIN_UNITS, BULK_DISCOUNT_RATE, MONTHLY_PLAN_AED, SETUP_FEE_AED, UNIT_PRICE_AED,
};
use crate::error::{CoreError, CoreResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MaintenancePlan {
    #[default]
    Standard,
    Monthly,
}

impl MaintenancePlan {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("monthly") {
            Self::Monthly
        } else {
            Self::Standard
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuoteRequest {
    pub units: u32,
    pub plan: MaintenancePlan,
    pub items: u32,
    pub has_items: bool,
}

impl QuoteRequest {
    /// Build a request from raw form values. `has_items` is the checked radio
    /// value, if any.
    pub fn from_form(units: &str, plan: &str, items: &str, has_items: Option<&str>) -> CoreResult<Self> {
        let has_items = match has_items.map(str::trim) {
            Some("yes") => true,
            Some("no") => false,
            _ => return Err(CoreError::MissingSelection("hasItems")),
        };
        Ok(Self {
            units: parse_count(units),
            plan: MaintenancePlan::parse(plan),
            items: parse_count(items),
            has_items,
        })
    }
}

/// Leading integer of a form value; anything unparseable or zero counts as 1.
pub fn parse_count(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub units: u32,
    pub unit_price: f64,
    pub gross: f64,
    pub discount: f64,
    pub unit_cost: f64,
    pub setup_fee: f64,
    pub plan: MaintenancePlan,
    pub maintenance_cost: f64,
    pub items: u32,
    pub has_items: bool,
    pub total: f64,
}

pub fn quote(req: &QuoteRequest) -> Quote {
    let gross = UNIT_PRICE_AED * req.units as f64;
    let discount = if req.units >= BULK_DISCOUNT_MIN_UNITS {
        gross * BULK_DISCOUNT_RATE
    } else {
        0.0
    };
    let unit_cost = gross - discount;
    let maintenance_cost = match req.plan {
        MaintenancePlan::Monthly => MONTHLY_PLAN_AED,
        MaintenancePlan::Standard => 0.0,
    };
    Quote {
        units: req.units,
        unit_price: UNIT_PRICE_AED,
        gross,
        discount,
        unit_cost,
        setup_fee: SETUP_FEE_AED,
        plan: req.plan,
        maintenance_cost,
        items: req.items,
        has_items: req.has_items,
        total: unit_cost + SETUP_FEE_AED + maintenance_cost,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownLine {
    pub label: String,
    pub amount: String,
    pub emphasis: bool,
}

impl Quote {
    pub fn breakdown(&self) -> Vec<BreakdownLine> {
        let line = |label: String, amount: String| BreakdownLine {
            label,
            amount,
            emphasis: false,
        };
        let mut lines = vec![line(
            format!(
                "{} Unit{} ({} AED each)",
                self.units,
                if self.units > 1 { "s" } else { "" },
                format_amount(self.unit_price)
            ),
            format!("{} AED", format_amount(self.gross)),
        )];
        if self.discount > 0.0 {
            lines.push(line(
                "Bulk Discount (10% off)".to_string(),
                format!("-{} AED", format_amount(self.discount)),
            ));
        }
        lines.push(line(
            "Initial Setup Fee".to_string(),
            format!("{} AED", format_amount(self.setup_fee)),
        ));
        lines.push(match self.plan {
            MaintenancePlan::Monthly => line(
                "Monthly Maintenance Plan".to_string(),
                format!("{} AED", format_amount(self.maintenance_cost)),
            ),
            MaintenancePlan::Standard => line(
                "Standard Maintenance Plan".to_string(),
                "Included (50 AED per visit)".to_string(),
            ),
        });
        lines.push(BreakdownLine {
            label: "Total Cost".to_string(),
            amount: format!("{} AED", format_amount(self.total)),
            emphasis: true,
        });
        lines
    }
}

/// Group thousands with commas and keep at most three fraction digits,
/// trailing zeros dropped (`2925` -> `"2,925"`, `3575.5` -> `"3,575.5"`).
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}
