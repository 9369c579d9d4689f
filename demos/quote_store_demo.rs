use quotebook::store::{QuoteStore, TextSource};

const QUOTES: &str = "\
stray line before any header
[Wisdom]
Knowing yourself is the beginning of all wisdom.
The only true wisdom is in knowing you know nothing.

[Empty]

[]
[Humor]
The road to success is dotted with many tempting parking spaces.
";

fn main() {
    println!("=== Quote Store Demo ===\n");

    let mut store = QuoteStore::new();
    store.subscribe(|snapshot| {
        println!(
            "   [update] category={:?} has_data={}",
            snapshot.active_category, snapshot.has_data
        );
    });

    // Demo 1: Load from an in-memory source
    println!("1. Loading quotes...");
    let result = store.load_from_source(&TextSource::new(QUOTES));
    println!("   {}", result.message());
    println!("   Initial quote: {}", store.current_quote());
    println!();

    // Demo 2: List categories with counts
    println!("2. Categories:");
    for category in store.categories() {
        println!("   {} ({})", category, store.quote_count(category));
    }
    println!();

    // Demo 3: Filter and step through quotes
    println!("3. Browsing 'Wisdom':");
    store.filter_quotes("Wisdom");
    for _ in 0..3 {
        println!("   {}", store.current_quote());
        store.next_quote();
    }
    println!();

    // Demo 4: Categories without quotes
    println!("4. Filtering 'Empty':");
    store.filter_quotes("Empty");
    println!("   {}", store.current_quote());
    store.next_quote();
    println!("   next -> {}", store.current_quote());
    println!();

    // Demo 5: Broken input
    println!("5. Loading text without headers...");
    let result = store.load("just a line\n");
    println!("   {}", result.message());
    println!("   Display: {}", store.current_quote());
}
