pub mod prompt_indicator;
pub mod text_indicator;
pub mod output_panel;
pub mod root_view;

pub use output_panel::OutputPanel;
pub use prompt_indicator::PromptIndicator;
pub use root_view::RootView;
pub use text_indicator::TextIndicator;
