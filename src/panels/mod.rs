mod canvas_panel;
mod toolbox;

pub use canvas_panel::canvas_panel;
pub use toolbox::toolbox_panel;
