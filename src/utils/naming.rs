use chrono::{DateTime, Local, TimeZone};

/// `<task>-YYYYmmdd-HHMMSS.<ext>`, used when no export path is given.
pub fn default_export_name(task: &str, extension: &str) -> String {
    export_name_at(task, extension, &Local::now())
}

fn export_name_at<Tz: TimeZone>(task: &str, extension: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{task}-{}.{extension}", at.format("%Y%m%d-%H%M%S"))
}
