//! Strategy: interchangeable algorithms behind one trait, chosen at
//! runtime by the context.

/// A parcel to be quoted.
#[derive(Debug, Clone, Copy)]
pub struct Parcel {
    pub weight_grams: u32,
    pub express: bool,
}

pub trait ShippingStrategy {
    fn carrier(&self) -> &'static str;
    fn quote_cents(&self, parcel: &Parcel) -> u32;
}

/// Flat fee, weight ignored, no express option.
pub struct FlatRate {
    pub cents: u32,
}

impl ShippingStrategy for FlatRate {
    fn carrier(&self) -> &'static str {
        "flat-rate"
    }

    fn quote_cents(&self, _parcel: &Parcel) -> u32 {
        self.cents
    }
}

/// Price scales with weight; express doubles it.
pub struct ByWeight {
    pub cents_per_kg: u32,
}

impl ShippingStrategy for ByWeight {
    fn carrier(&self) -> &'static str {
        "by-weight"
    }

    fn quote_cents(&self, parcel: &Parcel) -> u32 {
        let base = (u64::from(parcel.weight_grams) * u64::from(self.cents_per_kg) / 1000) as u32;
        if parcel.express {
            base * 2
        } else {
            base
        }
    }
}

/// Free above a threshold, otherwise a fixed fee.
pub struct FreeOverThreshold {
    pub threshold_grams: u32,
    pub fallback_cents: u32,
}

impl ShippingStrategy for FreeOverThreshold {
    fn carrier(&self) -> &'static str {
        "free-over"
    }

    fn quote_cents(&self, parcel: &Parcel) -> u32 {
        if parcel.weight_grams >= self.threshold_grams {
            0
        } else {
            self.fallback_cents
        }
    }
}

/// The context: holds whichever strategy it was given and delegates.
pub struct QuoteDesk {
    strategy: Box<dyn ShippingStrategy>,
}

impl QuoteDesk {
    pub fn new(strategy: Box<dyn ShippingStrategy>) -> Self {
        Self { strategy }
    }

    /// Swap the algorithm without rebuilding the desk.
    pub fn set_strategy(&mut self, strategy: Box<dyn ShippingStrategy>) {
        self.strategy = strategy;
    }

    pub fn quote(&self, parcel: &Parcel) -> String {
        format!(
            "{}: {} cents",
            self.strategy.carrier(),
            self.strategy.quote_cents(parcel)
        )
    }
}

pub fn demo() {
    let parcel = Parcel {
        weight_grams: 2_500,
        express: true,
    };
    println!("quoting a {}g express parcel:", parcel.weight_grams);

    let mut desk = QuoteDesk::new(Box::new(FlatRate { cents: 700 }));
    println!("  {}", desk.quote(&parcel));

    desk.set_strategy(Box::new(ByWeight { cents_per_kg: 320 }));
    println!("  {}", desk.quote(&parcel));

    desk.set_strategy(Box::new(FreeOverThreshold {
        threshold_grams: 2_000,
        fallback_cents: 500,
    }));
    println!("  {}", desk.quote(&parcel));
}
