pub mod breakdown_table;
pub mod kpi_card;
pub mod range_band;
pub mod toast;
