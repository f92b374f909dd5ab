mod tables;

pub use tables::{
    format_consumption_table, format_growth_report, format_growth_table, format_herd_summary,
    format_mortality_summary, format_revenue_report, format_stock_report, print_consumption_table,
    print_growth_report, print_growth_table, print_herd_summary, print_mortality_summary,
    print_revenue_report, print_stock_report,
};
