use std::fs;

use portfolio_site::sitemap::{default_entries, render_sitemap};

fn main() {
    let xml = render_sitemap(&default_entries()).expect("Default sitemap should render");
    fs::create_dir_all("public").expect("Should be able to create public dir");
    fs::write("public/sitemap.xml", xml).expect("Should be able to write sitemap file");
    println!("wrote public/sitemap.xml");
}
