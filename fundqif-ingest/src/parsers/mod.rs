pub mod dws_export;
