use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::site;

/// Title, description and social preview tags for the page `<head>`.
#[component]
pub fn SiteMeta() -> impl IntoView {
    view! {
        <Title text=site::TITLE />
        <Meta name="description" content=site::DESCRIPTION />
        <Meta name="keywords" content=site::keywords() />
        <Meta name="author" content=site::AUTHOR />
        <Link rel="canonical" href=site::SITE_URL />

        <Meta property="og:title" content=site::OG_TITLE />
        <Meta property="og:description" content=site::OG_DESCRIPTION />
        <Meta property="og:type" content=site::OG_TYPE />
        <Meta property="og:locale" content=site::OG_LOCALE />
        <Meta property="og:url" content=site::SITE_URL />

        <Meta name="twitter:card" content=site::TWITTER_CARD />
        <Meta name="twitter:title" content=site::TWITTER_TITLE />
        <Meta name="twitter:description" content=site::TWITTER_DESCRIPTION />
    }
}
