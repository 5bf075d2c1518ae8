//! Template method: the trait's provided `run()` fixes the skeleton of the
//! pipeline; implementors fill in the steps they care about.

/// A report pipeline. `run()` is the template: gather, then format each
/// line, then wrap it in a header and footer. Only `gather` and
/// `format_line` are mandatory; the framing has sensible defaults.
pub trait ReportPipeline {
    fn title(&self) -> String;

    /// Step 1: collect the raw records.
    fn gather(&self) -> Vec<(String, u32)>;

    /// Step 2: render one record.
    fn format_line(&self, name: &str, value: u32) -> String;

    /// Optional hook: runs after the body, before the footer.
    fn summary(&self, records: &[(String, u32)]) -> Option<String> {
        let _ = records;
        None
    }

    /// The template method. Implementors do not override this; the
    /// skeleton is the contract.
    fn run(&self) -> String {
        let records = self.gather();
        let mut out = format!("== {} ==\n", self.title());
        for (name, value) in &records {
            out.push_str(&self.format_line(name, *value));
            out.push('\n');
        }
        if let Some(summary) = self.summary(&records) {
            out.push_str(&summary);
            out.push('\n');
        }
        out.push_str(&format!("== end ({} rows) ==", records.len()));
        out
    }
}

/// Plain inventory listing; skips the optional summary hook.
pub struct InventoryReport;

impl ReportPipeline for InventoryReport {
    fn title(&self) -> String {
        "Inventory".into()
    }

    fn gather(&self) -> Vec<(String, u32)> {
        vec![
            ("widgets".into(), 130),
            ("gadgets".into(), 2),
            ("gizmos".into(), 41),
        ]
    }

    fn format_line(&self, name: &str, value: u32) -> String {
        format!("  {name}: {value} in stock")
    }
}

/// Sales report with a computed total in the summary hook.
pub struct SalesReport;

impl ReportPipeline for SalesReport {
    fn title(&self) -> String {
        "Sales (EUR)".into()
    }

    fn gather(&self) -> Vec<(String, u32)> {
        vec![("north".into(), 1_200), ("south".into(), 860)]
    }

    fn format_line(&self, name: &str, value: u32) -> String {
        format!("  {name} region: {value}")
    }

    fn summary(&self, records: &[(String, u32)]) -> Option<String> {
        let total: u32 = records.iter().map(|(_, v)| v).sum();
        Some(format!("  total: {total}"))
    }
}

pub fn demo() {
    println!("{}", InventoryReport.run());
    println!();
    println!("{}", SalesReport.run());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_frames_the_body() {
        let out = InventoryReport.run();
        assert!(out.starts_with("== Inventory ==\n"));
        assert!(out.ends_with("== end (3 rows) =="));
        assert!(out.contains("  gadgets: 2 in stock"));
    }

    #[test]
    fn test_summary_hook_is_optional() {
        assert!(!InventoryReport.run().contains("total"));
        assert!(SalesReport.run().contains("  total: 2060"));
    }
}
