pub mod sales_summary;
