use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::api::DEFAULT_AGE;
use crate::core::{AllocationBreakdown, BudgetRequest, RawBudgetInput, validate_input};
use crate::error::ValidationError;
use crate::report::format_idr;

#[derive(Parser, Debug)]
#[command(
    name = "akta",
    version,
    about = "AKTA - annual household budget allocation (zakat, ISWAF, debt, insurance, future fund)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON/PDF HTTP API
    Serve(ServeArgs),
    /// Print the allocation for the given income
    Allocate {
        #[command(flatten)]
        budget: BudgetArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Write the PDF report to a file
    Report {
        #[command(flatten)]
        budget: BudgetArgs,
        #[arg(
            long,
            short,
            help = "Output path; defaults to AKTA_<name>_<YYYYMMDD>.pdf in the current directory"
        )]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, env = "AKTA_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,
    #[arg(long, env = "AKTA_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServeArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

#[derive(Args, Debug, Clone)]
pub struct BudgetArgs {
    #[arg(long, help = "Name printed on the report")]
    pub name: String,
    #[arg(long, default_value_t = DEFAULT_AGE)]
    pub age: u32,
    #[arg(long, help = "Fixed annual income in rupiah (salary, allowances)")]
    pub fixed_income: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Variable annual income in rupiah (bonus, commission, freelance)"
    )]
    pub variable_income: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Current gold price per gram in rupiah, shown for zakat reference"
    )]
    pub gold_price: f64,
}

impl BudgetArgs {
    pub fn into_request(self) -> Result<BudgetRequest, ValidationError> {
        validate_input(RawBudgetInput {
            name: self.name,
            age: self.age,
            fixed_income: self.fixed_income,
            variable_income: self.variable_income,
            gold_price_per_gram: self.gold_price,
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Plain-text table with annual and monthly amounts for every category.
pub fn render_table(request: &BudgetRequest, breakdown: &AllocationBreakdown) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} tahun) - Total Pemasukan {}\n\n",
        request.person.name,
        request.person.age,
        format_idr(request.income.total_income())
    ));
    out.push_str(&format!(
        "{:<28} {:<12} {:>20} {:>18}\n",
        "Pos Pengeluaran", "Persentase", "Jumlah Tahunan", "Jumlah Bulanan"
    ));

    for item in breakdown.line_items() {
        let label = format!("{}{}", "  ".repeat(usize::from(item.depth)), item.label);
        out.push_str(&format!(
            "{:<28} {:<12} {:>20} {:>18}\n",
            label,
            item.annotation,
            format_idr(item.annual),
            format_idr(item.monthly())
        ));
    }

    let status = breakdown.status();
    out.push_str(&format!(
        "\n{:<41} {:>20} {:>18}\n",
        "Total Anggaran",
        format_idr(breakdown.grand_total),
        format_idr(breakdown.monthly_total())
    ));
    out.push_str(&format!(
        "{:<41} {:>20}\n\n",
        status.label(),
        format_idr(breakdown.surplus_or_deficit.abs())
    ));
    out.push_str(status.recommendation());
    out.push('\n');
    out
}
