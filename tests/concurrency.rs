//! One engine per thread: streams stay reproducible regardless of scheduling.

use std::thread;

use mulberry::Engine;

fn draws(mut rng: Engine) -> Vec<u32> {
    (0..10_000).map(|_| rng.next_u32()).collect()
}

#[test]
fn forked_engines_in_threads() {
    let parent = Engine::new(2023);
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let child = parent.fork(i);
            thread::spawn(move || draws(child))
        })
        .collect();
    let threaded: Vec<Vec<u32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let sequential: Vec<Vec<u32>> = (0..8).map(|i| draws(parent.fork(i))).collect();
    assert_eq!(threaded, sequential);
    // Siblings are not copies of each other
    for i in 1..8 {
        assert_ne!(threaded[0], threaded[i]);
    }
}
