mod layout;
mod menu;
mod picker;
mod results;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Picker => picker::draw_picker(f, app),
    }
}
