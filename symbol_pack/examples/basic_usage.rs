use symbol_pack::{BitPacker, IoSink, PackerConfig, SanitizePolicy, SymbolReader};

fn main() {
    println!("=== Symbol Pack Examples ===\n");

    // Example 1: Lottery draws 1..=32 as 5-bit symbols
    let _ = example_wrap5();

    // Example 2: Lottery draws 1..=64, skipping bad input
    let _ = example_skip6();

    // Example 3: Streaming straight into a writer
    let _ = example_io_sink();
}

fn example_wrap5() -> Result<(), symbol_pack::PackError> {
    println!("Example 1: 5-bit symbols, wrap policy");

    let mut packer = BitPacker::new(PackerConfig::wrap5())?;
    for raw in [7, 19, 32, 1, 33, 12, 25, 4] {
        packer.push_raw(raw)?;
    }

    println!("  Pushed {} symbols", packer.symbols_pushed());
    println!("  Leftover bits: {}", packer.valid_bits());
    packer.finish()?;
    println!("  Bytes: {:02X?}", packer.sink());
    println!();

    Ok(())
}

fn example_skip6() -> Result<(), symbol_pack::PackError> {
    println!("Example 2: 6-bit symbols, skip policy, flushed tail");

    let config = PackerConfig::skip6().with_flush_on_finish(true);
    let mut packer = BitPacker::new(config)?;
    let mut dropped = 0;
    for raw in [5, 12, 65, 64, 0] {
        if !packer.push_raw(raw)? {
            dropped += 1;
        }
    }
    let tail = packer.finish()?;
    let count = packer.symbols_pushed();
    let bytes = packer.into_sink();

    println!("  Kept {} numbers, dropped {}", count, dropped);
    println!("  Tail byte: {:?}", tail);
    println!("  Bytes: {:02X?}", bytes);

    let restored: Vec<u32> = SymbolReader::new(&bytes, 6)?
        .take(count)
        .map(symbol_pack::restore_raw)
        .collect();
    println!("  Restored: {:?}", restored);
    println!();

    Ok(())
}

fn example_io_sink() -> Result<(), symbol_pack::PackError> {
    println!("Example 3: IoSink over a Vec<u8> writer");

    let config = PackerConfig::new(3, SanitizePolicy::Wrap).with_flush_on_finish(true);
    let mut packer = BitPacker::with_sink(config, IoSink::new(Vec::new()))?;
    packer.extend([1, 2, 3, 4, 5, 6, 7])?;
    packer.finish()?;

    let written = packer.into_sink().into_inner();
    println!("  21 bits -> {} bytes: {:02X?}", written.len(), written);

    Ok(())
}
