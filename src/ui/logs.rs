use log::LevelFilter;
use ratatui::{
	Frame,
	layout::Rect,
	widgets::{Block, Borders, Clear},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use super::theme::Theme;

/// Collapsible pane showing recent log records.
pub(crate) struct LogPane {
	state: TuiWidgetState,
	pub(crate) visible: bool,
}

impl LogPane {
	pub(crate) fn new(level: LevelFilter) -> Self {
		Self {
			state: TuiWidgetState::new().set_default_display_level(level),
			visible: false,
		}
	}

	pub(crate) fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	pub(crate) fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}
		let widget = TuiLoggerWidget::default()
			.block(
				Block::default()
					.borders(Borders::TOP)
					.title("Log")
					.border_style(theme.muted),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_timestamp(None)
			.state(&self.state);
		frame.render_widget(widget, area);
	}
}
