//! Consumers of a finished shot chart
//!
//! Builds the chart title and output file name, and hands results to
//! renderers. Drawing the rink itself is left to whatever reads the JSON.

use crate::error::RenderError;
use crate::feed::GameId;
use crate::shot_chart::{ShotCategory, ShotChartResult, TeamSummary};
use crate::slug::file_segment;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Multi-line chart title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTitle {
    /// `NJD (3) vs. SEA (2)`
    pub headline: String,
    pub start_time: String,
    /// `12:34/2nd`
    pub clock: String,
    /// Away line first, then home
    pub team_lines: [String; 2],
}

impl ChartTitle {
    pub fn from_result(result: &ShotChartResult) -> Self {
        let away = &result.away_team;
        let home = &result.home_team;
        let meta = &result.game_meta;

        Self {
            headline: format!(
                "{} ({}) vs. {} ({})",
                away.code, away.stats.goals, home.code, home.stats.goals
            ),
            start_time: meta.start_time.clone(),
            clock: format!("{}/{}", meta.time_remaining, meta.period),
            team_lines: [team_line(away), team_line(home)],
        }
    }
}

fn team_line(team: &TeamSummary) -> String {
    format!(
        "{}: {} SOG ({} Total Shot Attempts)",
        team.code, team.stats.shots_on_goal, team.stats.shot_attempts
    )
}

impl fmt::Display for ChartTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        writeln!(f, "{}", self.start_time)?;
        writeln!(f, "{}", self.clock)?;
        writeln!(f)?;
        writeln!(f, "{}", self.team_lines[0])?;
        write!(f, "{}", self.team_lines[1])
    }
}

/// `shot-chart-{game}-{start}-{away}-vs-{home}.{extension}`
pub fn output_file_name(game_id: GameId, result: &ShotChartResult, extension: &str) -> String {
    format!(
        "shot-chart-{}-{}-{}-vs-{}.{}",
        game_id,
        file_segment(&result.game_meta.start_time),
        file_segment(&result.away_team.code),
        file_segment(&result.home_team.code),
        extension
    )
}

/// Renderer trait
///
/// Implement this trait to send a finished chart somewhere.
pub trait Renderer: Send + Sync {
    fn render(
        &self,
        game_id: GameId,
        result: &ShotChartResult,
        title: &ChartTitle,
    ) -> Result<(), RenderError>;

    /// Renderer name (for logging)
    fn name(&self) -> &'static str;
}

/// Prints the title and point counts to stdout
#[derive(Debug, Default)]
pub struct SummaryPrinter;

impl SummaryPrinter {
    pub fn write_summary<W: Write>(
        out: &mut W,
        game_id: GameId,
        result: &ShotChartResult,
        title: &ChartTitle,
    ) -> Result<(), RenderError> {
        writeln!(out, "Game {}", game_id)?;
        writeln!(out, "{}", title)?;
        writeln!(
            out,
            "Points drawn: {} goals, {} shots on goal, {} missed shots ({} hidden)",
            result.count_points(ShotCategory::Goal),
            result.count_points(ShotCategory::ShotOnGoal),
            result.count_points(ShotCategory::MissedShot),
            result.diagnostics.hidden_points
        )?;

        if !result.diagnostics.malformed.is_empty() {
            writeln!(
                out,
                "Skipped {} malformed plays:",
                result.diagnostics.malformed.len()
            )?;
            for err in &result.diagnostics.malformed {
                writeln!(out, "  {}", err)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }
}

impl Renderer for SummaryPrinter {
    fn render(
        &self,
        game_id: GameId,
        result: &ShotChartResult,
        title: &ChartTitle,
    ) -> Result<(), RenderError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        Self::write_summary(&mut out, game_id, result, title)
    }

    fn name(&self) -> &'static str {
        "SummaryPrinter"
    }
}

/// Writes the serialized result as `{output_dir}/{file name}.json`
#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, game_id: GameId, result: &ShotChartResult) -> PathBuf {
        self.output_dir.join(output_file_name(game_id, result, "json"))
    }
}

impl Renderer for JsonExporter {
    fn render(
        &self,
        game_id: GameId,
        result: &ShotChartResult,
        _title: &ChartTitle,
    ) -> Result<(), RenderError> {
        let path = self.path_for(game_id, result);

        fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::WriteFailed {
            path: self.output_dir.display().to_string(),
            source,
        })?;

        let json = serde_json::to_string_pretty(result).map_err(RenderError::Serialize)?;
        fs::write(&path, json).map_err(|source| RenderError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!("[render] Wrote {}", path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "JsonExporter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedEventError;
    use crate::feed::GameMeta;
    use crate::shot_chart::{Diagnostics, TeamStats};

    fn result() -> ShotChartResult {
        ShotChartResult {
            game_meta: GameMeta {
                period: "3rd".to_string(),
                time_remaining: "Final".to_string(),
                status: "Final".to_string(),
                start_time: "2023-01-19 7:00pm".to_string(),
            },
            away_team: TeamSummary {
                code: "NJD".to_string(),
                stats: TeamStats::new(61, 33, 3),
            },
            home_team: TeamSummary {
                code: "SEA".to_string(),
                stats: TeamStats::new(55, 28, 2),
            },
            points: Vec::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    #[test]
    fn test_chart_title() {
        let title = ChartTitle::from_result(&result());

        assert_eq!(title.headline, "NJD (3) vs. SEA (2)");
        assert_eq!(title.clock, "Final/3rd");
        assert_eq!(
            title.to_string(),
            "NJD (3) vs. SEA (2)\n\
             2023-01-19 7:00pm\n\
             Final/3rd\n\
             \n\
             NJD: 33 SOG (61 Total Shot Attempts)\n\
             SEA: 28 SOG (55 Total Shot Attempts)"
        );
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(GameId(2022020728), &result(), "png"),
            "shot-chart-2022020728-2023-01-19_7_00pm-NJD-vs-SEA.png"
        );
    }

    #[test]
    fn test_summary_lists_malformed_plays() {
        let mut result = result();
        result
            .diagnostics
            .malformed
            .push(MalformedEventError::new(12, "team.triCode"));
        let title = ChartTitle::from_result(&result);

        let mut out = Vec::new();
        SummaryPrinter::write_summary(&mut out, GameId(5), &result, &title).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Game 5\nNJD (3) vs. SEA (2)\n"));
        assert!(text.contains("Points drawn: 0 goals, 0 shots on goal, 0 missed shots (0 hidden)"));
        assert!(text.contains("Skipped 1 malformed plays:"));
        assert!(text.contains("  Malformed play #12: missing team.triCode"));
    }

    #[test]
    fn test_json_exporter_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("charts"));
        let result = result();
        let title = ChartTitle::from_result(&result);

        exporter.render(GameId(2022020728), &result, &title).unwrap();

        let path = exporter.path_for(GameId(2022020728), &result);
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written["home_team"]["code"], "SEA");
        assert_eq!(written["away_team"]["stats"]["goals"], 3);
        assert_eq!(written["game_meta"]["period"], "3rd");
    }
}
