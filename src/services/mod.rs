pub mod postprocess;
pub mod report_writer;
pub mod warn_writer;

pub use postprocess::{ensure_q_heading, normalize_or_fail_closed};
pub use report_writer::ReportWriter;
pub use warn_writer::WarnWriter;
