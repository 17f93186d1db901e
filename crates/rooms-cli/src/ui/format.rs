//! Formatting for sizes and plan summaries.

use std::fmt::Write as _;

use console::Term;
use owo_colors::OwoColorize;
use rooms_bundler::BuildPlan;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// ```
/// use rooms_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(999), "999 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Render a plain-text summary of a plan.
///
/// One block per job: name, input, both outputs, the external runtime, and
/// the transform chain.
pub fn render_plan_summary(plan: &BuildPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Build plan ({})", plan.mode);
    let _ = writeln!(out, "  components: {}", plan.base_paths.component_base_path);
    let _ = writeln!(out, "  server:     {}", plan.base_paths.server_base_path);

    for job in &plan.jobs {
        let _ = writeln!(out);
        let _ = writeln!(out, "▸ {}", job.name);
        let _ = writeln!(out, "    input     {}", job.input);
        for target in &job.outputs {
            let _ = writeln!(out, "    output    {}", target.file());
        }
        for external in &job.external {
            let _ = writeln!(out, "    external  {}", external);
        }
        let _ = writeln!(out, "    pipeline  {}", job.transform_names().join(" → "));
    }

    let _ = writeln!(out);
    let _ = write!(out, "{} job(s)", plan.len());
    out
}

/// Print the plan summary to stderr.
pub fn print_plan_summary(plan: &BuildPlan) {
    let width = (Term::stderr().size().1 as usize).min(80);
    let summary = render_plan_summary(plan);

    eprintln!("{}", "─".repeat(width));
    for line in summary.lines() {
        if colors_enabled() && line.starts_with('▸') {
            eprintln!("{}", line.bright_white().bold());
        } else {
            eprintln!("{}", line);
        }
    }
    eprintln!("{}", "─".repeat(width));
}
