use caldim_cli::pipeline::GenerationOutcome;

#[derive(Debug)]
pub struct GenerateResult {
    pub outcome: GenerationOutcome,
    pub show_table: bool,
}
