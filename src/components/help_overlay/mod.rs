mod component;

pub use component::HelpOverlayPanel;
