// src/gui/router.rs
use crate::config::state::Section::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::dashboard::PAGE,
    &pages::configuration::PAGE,
    &pages::websites::PAGE,
    &pages::history::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(section: Section) -> &'static dyn Page {
    match section {
        Dashboard     => &pages::dashboard::PAGE,
        Configuration => &pages::configuration::PAGE,
        Websites      => &pages::websites::PAGE,
        History       => &pages::history::PAGE,
    }
}
