//! Root command: print scheme://host of a URL.

use urlkit_core::url_model::root_url;

pub fn run_root(url: &str) {
    println!("{}", root_url(url));
}
