use chrono::{DateTime, Local};

use crate::core::{AllocationBreakdown, BudgetRequest, IncomeInput, PersonalData};

use super::format::format_file_date;

pub const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub person: PersonalData,
    pub income: IncomeInput,
    pub breakdown: AllocationBreakdown,
    pub generated_at: DateTime<Local>,
}

impl ReportContext {
    pub fn new(
        request: &BudgetRequest,
        breakdown: AllocationBreakdown,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            person: request.person.clone(),
            income: request.income,
            breakdown,
            generated_at,
        }
    }

    pub fn for_request(request: &BudgetRequest) -> Self {
        Self::new(request, request.allocate(), Local::now())
    }

    pub fn file_name(&self) -> String {
        format!(
            "AKTA_{}_{}.pdf",
            self.person.name.replace(' ', "_"),
            format_file_date(&self.generated_at)
        )
    }
}
