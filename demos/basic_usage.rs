// ============================================================================
// Basic Usage Example
// ============================================================================

use constrained_rounder::prelude::*;
use rust_decimal::Decimal;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Constrained Rounder Example ===\n");

    // Charm pricing: cents must end in 0, 5, or 9
    let digits = [
        Digit::new(0).unwrap(),
        Digit::new(5).unwrap(),
        Digit::new(9).unwrap(),
    ];
    let charm = ConstrainedRounder::new(2, &digits).unwrap();

    println!("Charm pricing (hundredths ending in 0, 5, or 9):");
    for price in ["12.63", "4.97", "19.92", "0.42"] {
        let value: Decimal = price.parse().unwrap();
        println!("  {} -> {}", value, charm.round(value));
    }

    // Bulk quotes snap to the nearest hundred ending in 5
    let config = RounderConfig::new(-2, vec![5]);
    let bulk = create_from_config(&config).unwrap();

    println!("\nBulk quotes (hundreds ending in 5):");
    for quote in ["12350", "8711", "449"] {
        let value: Decimal = quote.parse().unwrap();
        println!("  {} -> {}", value, bulk.round(value));
    }

    println!("\nStrategy: {}", charm.name());
}
