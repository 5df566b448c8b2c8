//! Console walk-through of the data provider
//!
//! Seeds a store, then performs the requests a dashboard session would make.
//!
//! ```text
//! cargo run --example console -- [config.yaml]
//! RUST_LOG=travel_admin=debug cargo run --example console
//! ```

use anyhow::Result;
use travel_admin::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("🧭 Travel Admin Console\n");

    let config = match std::env::args().nth(1) {
        Some(path) => StoreConfig::from_yaml_file(path)?,
        None => StoreConfig::default(),
    };
    let mut store = ResourceStore::seeded(&config);

    // First page of hotels, as the hotel list view requests it
    let hotels = store.get_list(
        "hotels",
        &GetListParams::new().paginate(1, 5).sort(Sort::asc("id")),
    )?;
    println!("📋 Hotels ({} total):", hotels.total);
    for hotel in &hotels.data {
        println!(
            "   #{} {} in {} ({} / night)",
            hotel["id"], hotel["name"], hotel["location"], hotel["pricePerNight"]
        );
    }

    // Cheapest-first tours on page 2
    let tours = store.get_list(
        "tours",
        &GetListParams::new().paginate(2, 5).sort(Sort::asc("price")),
    )?;
    println!("\n🗺️  Tours page 2 of {}:", tours.total.div_ceil(5));
    for tour in &tours.data {
        println!("   #{} {} ({})", tour["id"], tour["title"], tour["price"]);
    }

    // Create, update and delete a package
    let created = store.create(
        "packages",
        CreateParams::new(json!({
            "title": "Nile Explorer",
            "description": "Cairo, Luxor and Aswan in one week",
            "includes": ["Hotel", "Nile cruise", "Guide"],
            "price": 1450.0,
            "duration": "7 days"
        })),
    )?;
    let id = created.data["id"].as_u64().unwrap_or_default();
    println!("\n✅ Created package #{}", id);

    let mut changed = created.data.clone();
    changed["price"] = json!(1299.0);
    let updated = store.update(
        "packages",
        UpdateParams::new(id, changed).with_previous(created.data),
    )?;
    println!("✏️  Package #{} now costs {}", id, updated.data["price"]);

    store.delete("packages", DeleteParams::new(id))?;
    println!("🗑️  Deleted package #{}", id);

    match store.get_one("packages", GetOneParams { id }) {
        Ok(_) => println!("❌ Package #{} is still there", id),
        Err(err) => println!("   Lookup afterwards: {} ({})", err, err.error_code()),
    }

    // Reviews attached to the first hotel
    let reviews = store.get_many_reference(
        "reviews",
        GetManyReferenceParams::new("relatedId", 1),
    )?;
    println!("\n⭐ Reviews with relatedId 1: {}", reviews.total);

    // Search box over the current inquiries
    let inquiries = store.records::<Inquiry>().iter().cloned().collect::<Vec<_>>();
    let found = search(&inquiries, "nile");
    println!("🔎 Inquiries mentioning 'nile': {}", found.len());

    let summary = DashboardSummary::collect(&store);
    println!("\n📊 Dashboard");
    println!(
        "   Hotels: {} ({} available)",
        summary.total_hotels, summary.available_hotels
    );
    println!("   Available yachts: {}", summary.available_yachts);
    println!("   Tours: {}", summary.total_tours);
    println!("   New inquiries: {}", summary.new_inquiries);
    if let Some(rating) = summary.average_rating {
        println!("   Average rating: {:.1}", rating);
    }
    println!("\n{}", serde_json::to_string_pretty(&summary.counts)?);

    Ok(())
}
