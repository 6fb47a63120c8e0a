use rand::Rng;
use stepwise_ir::limits::MAX_CITIES;
use stepwise_ir::types::City;

/// Cities with sequential ids scattered over an 800x500 canvas.
pub fn random_cities<R: Rng>(rng: &mut R, count: usize) -> Vec<City> {
    (0..count.min(MAX_CITIES))
        .map(|id| City {
            id,
            x: rng.gen_range(50.0..750.0),
            y: rng.gen_range(50.0..450.0),
        })
        .collect()
}
