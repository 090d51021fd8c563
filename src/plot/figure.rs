//! Figure assembly.

use super::{ColorGrid, LineData, PlotKind};
use crate::data::{read_table, NumericTable};
use crate::error::Result;
use std::path::Path;

/// Title drawn above all panels.
pub const FIGURE_TITLE: &str = "Plots";

/// One subplot.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Subplot title (the file's base name).
    pub title: String,
    /// Loaded data.
    pub table: NumericTable,
    /// Series for line plots.
    pub line: LineData,
    /// Matrix for pseudocolor plots.
    pub grid: ColorGrid,
}

impl Panel {
    /// Build a panel from a loaded table.
    pub fn from_table(table: NumericTable) -> Self {
        let line = LineData::from_table(&table);
        let grid = ColorGrid::from_table(&table);
        Self {
            title: table.name.clone(),
            table,
            line,
            grid,
        }
    }
}

/// A titled stack of panels, one per input file.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Figure title.
    pub title: String,
    /// Panels in input order.
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Create a figure from prepared panels.
    pub fn new(panels: Vec<Panel>) -> Self {
        Self {
            title: FIGURE_TITLE.to_string(),
            panels,
        }
    }

    /// Load every file, stopping at the first failure.
    pub fn load<P: AsRef<Path>>(paths: &[P], kind: PlotKind) -> Result<Self> {
        let panels = paths
            .iter()
            .map(|p| read_table(p.as_ref(), kind.column_rule()).map(Panel::from_table))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Loaded {} panel(s)", panels.len());
        Ok(Self::new(panels))
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the figure has no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_keeps_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("alpha.txt");
        let b = dir.path().join("beta.txt");
        writeln!(std::fs::File::create(&a).unwrap(), "1\n2\n3").unwrap();
        writeln!(std::fs::File::create(&b).unwrap(), "0 1\n1 4").unwrap();

        let fig = Figure::load(&[&b, &a], PlotKind::Line).unwrap();
        assert_eq!(fig.title, "Plots");
        assert_eq!(fig.len(), 2);
        assert_eq!(fig.panels[0].title, "beta.txt");
        assert_eq!(fig.panels[1].title, "alpha.txt");
        assert!(matches!(fig.panels[0].line, LineData::Paired { .. }));
        assert!(matches!(fig.panels[1].line, LineData::Indexed(_)));
    }

    #[test]
    fn load_fails_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.txt");
        writeln!(std::fs::File::create(&bad).unwrap(), "1\nx").unwrap();

        assert!(Figure::load(&[bad], PlotKind::Line).is_err());
    }
}
