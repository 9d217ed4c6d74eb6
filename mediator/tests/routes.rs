use mediator::layout::LUCIDE_ICONS_URL;
use mediator::pages::{home, HOME_PATH, HOME_TITLE};
use mediator::{app_routes, RouteError};
use webdom::{find_element, HeadingLevel, Tag};

#[test]
fn test_single_home_route() {
    let routes = app_routes();
    assert_eq!(routes.paths().collect::<Vec<_>>(), vec!["/home"]);

    let home = routes.get(HOME_PATH).unwrap();
    assert_eq!(home.title, "Home");
    assert!(home.on_load.is_none());
}

#[test]
fn test_render_home() {
    let page = app_routes().render("/home").unwrap();
    assert_eq!(page.title, HOME_TITLE);
    assert!(page.html.contains("<title>Home</title>"));
    assert!(page.html.contains("User Dashboard"));
    assert!(page.html.contains("Discussion Mediator"));
    assert!(find_element(&page.tree, "trends").is_some());
}

#[test]
fn test_render_home_with_trailing_slash() {
    assert!(app_routes().render("/home/").is_ok());
}

#[test]
fn test_unknown_route() {
    let err = app_routes().render("/").unwrap_err();
    assert_eq!(err, RouteError::NotFound { path: "/".into() });
}

#[test]
fn test_hover_rule_reaches_document_head() {
    let page = app_routes().render(HOME_PATH).unwrap();
    let head_end = page.html.find("</head>").unwrap();
    let hover = page
        .html
        .find(":hover { background-color: #4338CA; }")
        .unwrap();
    assert!(hover < head_end);
    assert!(page.html.contains("@media (min-width: 768px)"));
}

#[test]
fn test_home_icons_are_drawn_by_icon_font() {
    let page = app_routes().render(HOME_PATH).unwrap();
    assert!(page.html.contains(&format!(
        "<link href=\"{LUCIDE_ICONS_URL}\" rel=\"stylesheet\">"
    )));

    let icons: Vec<_> = page.html.match_indices("<i ").map(|(i, _)| &page.html[i..]).collect();
    assert_eq!(icons.len(), 6);
    for icon in icons {
        let tag = &icon[..icon.find('>').unwrap()];
        assert!(tag.contains("class=\"icon-"), "icon without glyph class: {tag}");
    }

    for name in ["mic", "smile", "frown", "check-circle"] {
        assert!(page.html.contains(&format!("class=\"icon-{name}\"")));
    }
}

#[test]
fn test_home_heading() {
    let page = home();
    assert_eq!(page.style.get("gap"), Some("3rem"));

    let heading = &page.children_slice()[0];
    assert_eq!(heading.tag, Tag::Heading(HeadingLevel::H1));
    assert_eq!(heading.text_content(), "User Dashboard");
    assert_eq!(heading.style.get("font-size"), Some("1.25rem"));
    assert_eq!(heading.style.get("line-height"), Some("1.75rem"));
}
