use rand::Rng;

// Demo coordinates around San Francisco; a real deployment would read a GPS
// module instead.
const BASE_LATITUDE: f64 = 37.7749;
const BASE_LONGITUDE: f64 = -122.4194;
const POSITION_JITTER: f64 = 0.05;

pub fn jittered_position() -> (f64, f64) {
    let mut rng = rand::rng();

    (
        BASE_LATITUDE + rng.random_range(-POSITION_JITTER..POSITION_JITTER),
        BASE_LONGITUDE + rng.random_range(-POSITION_JITTER..POSITION_JITTER),
    )
}

pub fn device_status() -> &'static str {
    const STATUSES: [&str; 5] = ["online", "idle", "processing", "warning", "error"];

    // Make 'online' more likely
    let roll = rand::rng().random_range(0..STATUSES.len());
    if roll < 3 { "online" } else { STATUSES[roll] }
}

pub fn sensor_value() -> f64 {
    f64::from(rand::rng().random_range(1..=100))
}
