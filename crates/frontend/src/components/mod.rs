pub mod info_panel;
pub mod map_view;
pub mod route_panel;
pub mod search_panel;
