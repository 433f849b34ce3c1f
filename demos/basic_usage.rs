// ============================================================================
// Basic Usage Example
// ============================================================================

use tagged_numeric::prelude::*;

declare_units!(Celsius, Kelvin, Bytes);

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Tagged Floats ===\n");

    let morning = TaggedFloat::<f64, Celsius>::new(12.5);
    let afternoon = TaggedFloat::<f64, Celsius>::from(21u8);
    let rise = afternoon - morning;
    println!("{:?} -> {:?}, rise of {}", morning, afternoon, rise);

    let mut reading = TaggedFloat::<f64, Celsius>::new(-3.5);
    println!(
        "Rounded (to nearest, ties away): {}",
        reading.rounded(RoundingRule::ToNearestOrAwayFromZero)
    );
    println!(
        "Rounded (to nearest, ties even): {}",
        reading.rounded(RoundingRule::ToNearestOrEven)
    );
    reading.round(RoundingRule::Down);
    println!("Rounded down in place: {}", reading);

    let sample = TaggedFloat::<f64, Celsius>::new(96.0);
    println!(
        "\n{} = {} x 2^{} (sign {}, ulp {})",
        sample,
        sample.significand(),
        sample.exponent(),
        sample.sign(),
        sample.ulp()
    );

    // Converting between units is explicit: unwrap, transform, re-tag
    let absolute = TaggedFloat::<f64, Kelvin>::new(afternoon.get() + 273.15);
    println!("{:?}", absolute);

    match TaggedFloat::<f32, Celsius>::try_exactly(16_777_217u32) {
        Ok(value) => println!("Exact: {}", value),
        Err(error) => println!("16777217 as f32: {}", error),
    }

    println!("\n=== Tagged Unsigned Integers ===\n");

    let header = TaggedUnsigned::<u8, Bytes>::new(200);
    let body = TaggedUnsigned::<u8, Bytes>::new(100);
    let (partial, overflow): (TaggedUnsigned<u8, Bytes>, bool) =
        header.adding_reporting_overflow(body).into();
    println!("{} + {} = {} (overflow: {})", header, body, partial, overflow);

    let word = TaggedUnsigned::<u32, Bytes>::new(0x0000_0001);
    println!("{:#010x} byte-swapped: {:#010x}", word.get(), word.byte_swapped().get());

    let product =
        TaggedUnsigned::<u64, Bytes>::max_value().multiplied_full_width(TaggedUnsigned::new(3));
    println!("u64::MAX * 3 = (high {}, low {})", product.high, product.low);

    match TaggedUnsigned::<u64, Bytes>::zero().checked_dividing_full_width(product) {
        Ok(parts) => println!("Quotient {} remainder {}", parts.quotient, parts.remainder),
        Err(error) => println!("Full-width division failed: {}", error),
    }

    match TaggedUnsigned::<u16, Bytes>::try_from_float(1.0e9f64) {
        Ok(value) => println!("Converted: {}", value),
        Err(error) => println!("1e9 as u16: {}", error),
    }

    println!(
        "\nUnits in play: {}, {}, {}",
        unit_name::<Celsius>(),
        unit_name::<Kelvin>(),
        unit_name::<Bytes>()
    );
}
