use crate::scan::Analysis;
use std::fmt::Write;

const RULE: &str = "---------------------------------";

/// Plain-text report for a finished run.
pub fn render_report(analysis: &Analysis) -> String {
    let stats = &analysis.stats;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "--- Log Analysis Report ---");
    let _ = writeln!(
        out,
        "Processing Time: {:.2} seconds",
        analysis.elapsed.as_secs_f64()
    );
    let _ = writeln!(out, "Workers: {}", analysis.workers);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Total Requests Processed: {}", stats.total_lines);
    let _ = writeln!(out, "Total Errors: {}", stats.error_count);
    let _ = writeln!(out, "Total Warnings: {}", stats.warning_count);

    if let (Some(rate), Some(avg)) = (stats.error_rate(), stats.average_response_time_ms()) {
        let _ = writeln!(out, "Error Rate: {rate:.2}%");
        let _ = writeln!(out, "Average Response Time: {avg:.2} ms");
    }

    out.push_str("\n--- HTTP Status Codes ---\n");
    for (status, count) in &stats.status_code_counts {
        let _ = writeln!(out, "  {status}: {count} requests");
    }

    out.push_str("\n--- HTTP Method Distribution ---\n");
    for (method, count) in &stats.http_method_counts {
        let _ = writeln!(out, "  {method}: {count} requests");
    }

    out.push_str(RULE);
    out.push('\n');
    out
}
