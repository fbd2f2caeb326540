use serde::Serialize;

pub const MONTHS_PER_YEAR: f64 = 12.0;

// Rupiah; absorbs floating-point residue around a zero balance.
pub const BALANCE_TOLERANCE: f64 = 1e-6;

const DEFICIT_RECOMMENDATION: &str = "PERINGATAN: Anggaran Anda mengalami DEFISIT. \
Silakan tinjau kembali pos-pos pengeluaran yang mungkin melebihi \
persentase yang disarankan. Pertimbangkan untuk mengurangi pos \
Belanja Sekarang atau meningkatkan pemasukan.";

const SURPLUS_RECOMMENDATION: &str = "SELAMAT: Anggaran Anda mengalami SURPLUS! \
Disarankan untuk menambah alokasi pada Pos Dana Masa Depan dalam \
bentuk investasi yang AMAN dan MENGUNTUNGKAN. Hindari hanya menabung, \
gunakan instrumen investasi seperti reksa dana, obligasi, atau emas \
untuk mengoptimalkan dana surplus Anda.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeInput {
    pub fixed_income: f64,
    pub variable_income: f64,
    pub gold_price_per_gram: f64,
}

impl IncomeInput {
    pub fn total_income(&self) -> f64 {
        self.fixed_income + self.variable_income
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBreakdown {
    pub religious_obligation: f64,
    pub social_contribution: f64,
    pub debt_total: f64,
    pub productive_debt: f64,
    pub consumptive_debt: f64,
    pub insurance_contribution: f64,
    pub future_fund: f64,
    pub fixed_total: f64,
    pub discretionary_spending: f64,
    pub grand_total: f64,
    pub surplus_or_deficit: f64,
}

impl AllocationBreakdown {
    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_balance(self.surplus_or_deficit)
    }

    pub fn line_items(&self) -> [LineItem; 8] {
        [
            LineItem::top("Pos Zakat", "(2.5%)", self.religious_obligation),
            LineItem::top("Pos ISWAF", "(Max 7.5%)", self.social_contribution),
            LineItem {
                highlighted: true,
                ..LineItem::top("Pos Utang", "(Max 35%)", self.debt_total)
            },
            LineItem::inset("a. Utang Produktif", "Max (20%)", self.productive_debt),
            LineItem::inset("b. Utang Konsumtif", "Max (15%)", self.consumptive_debt),
            LineItem::top(
                "Pos Kontribusi Asuransi",
                "min (10%)",
                self.insurance_contribution,
            ),
            LineItem::top("Pos Dana Masa Depan", "min (10%)", self.future_fund),
            LineItem::top("Pos Belanja Sekarang", "", self.discretionary_spending),
        ]
    }

    pub fn monthly_total(&self) -> f64 {
        self.grand_total / MONTHS_PER_YEAR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Surplus,
    Deficit,
}

impl BudgetStatus {
    pub fn from_balance(surplus_or_deficit: f64) -> Self {
        if surplus_or_deficit >= -BALANCE_TOLERANCE {
            BudgetStatus::Surplus
        } else {
            BudgetStatus::Deficit
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetStatus::Surplus => "Surplus",
            BudgetStatus::Deficit => "Defisit",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            BudgetStatus::Surplus => SURPLUS_RECOMMENDATION,
            BudgetStatus::Deficit => DEFICIT_RECOMMENDATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub label: &'static str,
    pub annotation: &'static str,
    pub annual: f64,
    /// 0 for a category, 1 for a sub-item drawn inset under its parent.
    pub depth: u8,
    pub highlighted: bool,
}

impl LineItem {
    fn top(label: &'static str, annotation: &'static str, annual: f64) -> Self {
        Self {
            label,
            annotation,
            annual,
            depth: 0,
            highlighted: false,
        }
    }

    fn inset(label: &'static str, annotation: &'static str, annual: f64) -> Self {
        Self {
            depth: 1,
            ..Self::top(label, annotation, annual)
        }
    }

    pub fn monthly(&self) -> f64 {
        self.annual / MONTHS_PER_YEAR
    }
}
