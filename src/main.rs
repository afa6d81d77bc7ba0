mod about;
mod admin;
mod certificates;
mod config;
mod contact;
mod content;
mod delivery;
mod hero;
mod navbar;
mod projects;
mod routes;
mod skills;
mod stats;
mod theme;

fn main() {
    dioxus::launch(routes::App);
}
