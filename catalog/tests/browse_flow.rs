//! Full browse session over the builtin catalog, the way the services
//! section drives it: type a query, expand, page around, clear.

use infinity_catalog::{Catalog, PAGE_SIZE, ServiceBrowser};
use pretty_assertions::assert_eq;

#[test]
fn search_expand_page_and_clear() {
    let mut browser = ServiceBrowser::new(Catalog::builtin());

    // Landing state: collapsed, first three services.
    assert_eq!(
        browser.current_page(),
        [
            "Condo complex management",
            "Industrial property management",
            "Property inspections",
        ]
    );
    assert_eq!(browser.page_count(), 1);

    // Typing narrows live; collapsed mode still caps at one page.
    browser.set_query("management");
    assert_eq!(browser.filtered().len(), 6);
    assert_eq!(browser.visible().len(), PAGE_SIZE);

    // "See All" opens up the rest of the matches.
    browser.toggle_show_all();
    assert_eq!(browser.visible().len(), 6);
    assert_eq!(browser.page_count(), 2);

    // Page to the back half and wrap.
    browser.next_page();
    assert_eq!(
        browser.current_page(),
        [
            "Property management",
            "Rental property management",
            "Tenant management",
        ]
    );
    browser.next_page();
    assert_eq!(browser.page(), 0);

    // Refining the query rewinds the cursor.
    browser.next_page();
    browser.set_query("rent");
    assert_eq!(browser.page(), 0);
    assert_eq!(
        browser.filtered(),
        ["Rent collection", "Rental property management"]
    );

    // Clearing the query restores the whole catalog, still expanded.
    browser.set_query("");
    assert_eq!(browser.visible().len(), 12);
    assert_eq!(browser.page_count(), 4);
}

#[test]
fn empty_catalog_never_divides_by_zero() {
    let mut browser = ServiceBrowser::new(Catalog::new(Vec::<String>::new()));
    assert_eq!(browser.page_count(), 0);
    assert!(browser.current_page().is_empty());
    browser.next_page();
    browser.prev_page();
    assert_eq!(browser.page(), 0);
}
