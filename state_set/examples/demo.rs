use state_set::{StateSet, StateSetError};

fn main() {
    env_logger::init();
    println!("=== State Set Examples ===\n");

    // Example 1: One-hot menu selection
    if let Err(e) = example_menu() {
        eprintln!("menu example failed: {}", e);
    }

    // Example 2: Snapshot around a temporary change
    let _ = example_snapshot();

    // Example 3: Memory footprint
    example_footprint();
}

fn print_set(label: &str, set: &StateSet) {
    let mut states = vec![0u8; set.serialized_size()];
    let written = set.serialize(&mut states);
    let mut index = [0u8; 16];
    let described = set.index_description(&mut index);

    println!(
        "  {:<14} {}  [{}]  count={}",
        label,
        String::from_utf8_lossy(&states[..written]),
        String::from_utf8_lossy(&index[..described]),
        set.count()
    );
}

fn example_menu() -> Result<(), StateSetError> {
    println!("Example 1: One-hot menu selection");

    let mut menu = StateSet::try_new(10)?;
    menu.set_true(3, true);
    print_set("select 3", &menu);

    menu.toggle(3);
    print_set("toggle 3", &menu);

    menu.set_range(2, 5, true);
    print_set("range 2..=5", &menu);

    menu.invert_all();
    print_set("invert", &menu);
    println!("  true indices: {:?}", menu.all_true_indices());
    println!();

    Ok(())
}

fn example_snapshot() -> Result<(), StateSetError> {
    println!("Example 2: Snapshot and restore");

    let mut leds = StateSet::try_new(8)?;
    leds.set_default();
    leds.save();
    print_set("saved", &leds);

    leds.set_all(true);
    print_set("all on", &leds);

    leds.restore();
    print_set("restored", &leds);

    let mut mirror = StateSet::try_new(8)?;
    mirror.copy_from(&leds)?;
    print_set("mirror", &mirror);

    let mut wrong = StateSet::try_new(9)?;
    if let Err(e) = wrong.copy_from(&leds) {
        println!("  copy into 9 states refused: {}", e);
    }
    println!();

    Ok(())
}

fn example_footprint() {
    println!("Example 3: Memory footprint");

    for requested in [1, 10, 64, 254, 300] {
        let set = StateSet::new(requested);
        if !set.is_usable() {
            println!("  {:>3} states: allocation failed", requested);
            continue;
        }
        println!(
            "  {:>3} requested -> {:>3} states in {:>2} bytes (bool array: {} bytes)",
            requested,
            set.capacity(),
            set.storage_size(),
            set.capacity()
        );
    }
}
