// tests/listing_table.rs
//
// ListingTable: sort order, filtering, and their interplay.

use turin_watch::data::{ListingTable, SortKey};
use turin_watch::store::{Dataset, Listing};

fn prices(t: &ListingTable) -> Vec<i32> {
    t.visible().map(|l| l.price).collect()
}

fn locations(t: &ListingTable) -> Vec<&str> {
    t.visible().map(|l| l.location.as_str()).collect()
}

fn recent() -> ListingTable {
    ListingTable::new(&Dataset::sample().recent_listings)
}

#[test]
fn sort_by_price_is_descending() {
    let mut t = recent();
    t.sort(SortKey::Price);
    assert_eq!(prices(&t), [720, 580, 450]);
}

#[test]
fn sort_by_location_is_ascending() {
    let mut t = recent();
    t.sort(SortKey::Location);
    assert_eq!(locations(&t), ["Centro", "Crocetta", "San Salvario"]);
}

#[test]
fn sort_by_date_is_newest_first() {
    let ds = Dataset::sample();
    let mut t = ListingTable::new(&ds.history_listings);
    t.sort(SortKey::Price);
    t.sort(SortKey::Date);
    let dates: Vec<_> = t.visible().map(|l| l.added_at).collect();
    let mut expected = dates.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, expected);
    assert_eq!(t.visible().next().map(|l| l.title.as_str()), Some("Bilocale Centro Storico"));
}

#[test]
fn unknown_sort_key_falls_back_to_date() {
    let mut by_name = recent();
    by_name.sort(SortKey::Price);
    by_name.sort_by_name("popularity");
    assert_eq!(by_name.current_sort(), SortKey::Date);

    let mut by_date = recent();
    by_date.sort(SortKey::Date);
    assert_eq!(by_name, by_date);

    assert_eq!("PRICE".parse::<SortKey>(), Ok(SortKey::Price));
}

#[test]
fn location_sort_folds_case_and_accents() {
    let mk = |loc: &str| Listing::parse("x", 500, loc, "2025-08-01 10:00", "https://example.com", None).unwrap();
    let mut t = ListingTable::new(&[mk("zona"), mk("Èrba"), mk("centro"), mk("Borgo")]);
    t.sort(SortKey::Location);
    assert_eq!(locations(&t), ["Borgo", "centro", "Èrba", "zona"]);
}

#[test]
fn filter_crocetta_shows_only_the_studio() {
    let mut t = recent();
    t.filter("crocetta");
    let titles: Vec<&str> = t.visible().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["Studio Crocetta"]);
    assert_eq!(t.visible_count(), 1);
    assert_eq!(t.len(), 3);
}

#[test]
fn filter_is_case_insensitive_over_visible_text() {
    let ds = Dataset::sample();
    let mut t = ListingTable::new(&ds.history_listings);

    t.filter("SUBITO");
    assert_eq!(prices(&t), [850]);

    // Formatted price and date are searchable too.
    t.filter("€580");
    assert_eq!(prices(&t), [580]);
    t.filter("03/08/2025");
    assert_eq!(t.visible_count(), 2);

    // The link is not part of the row text.
    t.filter("https");
    assert_eq!(t.visible_count(), 0);
}

#[test]
fn empty_filter_shows_every_row() {
    let mut t = recent();
    t.filter("nothing matches this");
    assert_eq!(t.visible_count(), 0);
    t.filter("");
    assert_eq!(t.visible_count(), t.len());
    assert!(t.rows().iter().all(|r| r.visible));
}

#[test]
fn filter_and_sort_commute() {
    let ds = Dataset::sample();
    for key in SortKey::ALL {
        for term in ["", "centro", "o", "idealista"] {
            let mut a = ListingTable::new(&ds.history_listings);
            a.filter(term);
            a.sort(key);

            let mut b = ListingTable::new(&ds.history_listings);
            b.sort(key);
            b.filter(term);

            assert_eq!(a, b, "key={key} term={term:?}");
        }
    }
}

#[test]
fn filter_and_sort_are_idempotent() {
    let ds = Dataset::sample();
    let mut t = ListingTable::new(&ds.history_listings);
    t.sort(SortKey::Location);
    t.filter("a");
    let once = t.clone();
    t.sort(SortKey::Location);
    t.filter("a");
    assert_eq!(t, once);
}

#[test]
fn sort_leaves_visibility_alone() {
    let mut t = recent();
    t.filter("crocetta");
    t.sort(SortKey::Price);
    assert_eq!(t.visible_count(), 1);
    assert_eq!(t.current_filter(), "crocetta");
}
