use cgisf_lib::cgisf;
use rand::Rng;

/// `num` generated sentences joined by single spaces, without the final
/// trailing space.
pub fn random_sentences(num: usize) -> String {
    let rng = &mut rand::thread_rng();

    (0..num)
        .map(|_| {
            cgisf(
                rng.gen_range(1..3),
                rng.gen_range(1..3),
                rng.gen_range(1..5),
                rng.gen_bool(0.5),
                rng.gen_range(1..3),
                rng.gen_bool(0.5),
            )
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
