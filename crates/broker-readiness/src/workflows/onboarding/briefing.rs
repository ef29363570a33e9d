use super::evaluation::{strongest_dimension, weakest_dimension, AnalysisResult};

impl AnalysisResult {
    /// One-paragraph pre-call summary for the sales consultant.
    pub fn briefing(&self) -> String {
        let scores = self.breakdown();
        let weakest = weakest_dimension(&scores);
        let strongest = strongest_dimension(&scores);

        let mut briefing = format!(
            "{} readiness ({}% success probability). Strongest: {} ({}). Weakest: {} ({}). Lead with {}.",
            self.success_band.label(),
            self.success_probability,
            strongest.label(),
            scores.get(strongest),
            weakest.label(),
            scores.get(weakest),
            self.primary_sales_angle.label(),
        );

        if self.risk_flags.is_empty() {
            briefing.push_str(" No risk flags.");
        } else {
            let concerns = self
                .risk_flags
                .iter()
                .map(|flag| flag.description())
                .collect::<Vec<_>>()
                .join("; ");
            briefing.push_str(&format!(" Watch for: {concerns}."));
        }

        briefing
    }
}
