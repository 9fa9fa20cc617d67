use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use trackpaint_geom::CoordsXY;
use trackpaint_session::PaintSession;
use trackpaint_track::{Ride, TrackElemType, TrackElement};
use trackpaint_rides::{RideType, track_paint_function};

fn bench_dispatch_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_lookup");
    // Build every table outside the timed loop.
    for ride in RideType::ALL {
        black_box(ride.dispatch_table());
    }
    group.bench_function("all_rides_all_elements", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for ride in RideType::ALL {
                for &elem in TrackElemType::ALL {
                    found += track_paint_function(black_box(ride), black_box(elem)).is_some() as usize;
                }
            }
            black_box(found);
        })
    });
    group.finish();
}

fn bench_paint_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint_sweep");
    let ride = Ride::default();
    for ride_type in RideType::ALL {
        let elements: Vec<_> = ride_type.supported_elements().collect();
        let support_type = ride_type.default_support_type();
        group.bench_function(ride_type.name(), |b| {
            let mut session = PaintSession::new();
            session.map_position = CoordsXY::new(64, 96);
            b.iter(|| {
                let mut draws = 0usize;
                for &elem in &elements {
                    let Some(f) = track_paint_function(ride_type, elem) else { continue };
                    let element = TrackElement::new(elem, 56);
                    for sequence in 0..elem.sequence_count() {
                        for direction in 0..4 {
                            session.reset();
                            f(&mut session, &ride, sequence, direction, 56, &element, support_type);
                            draws += session.draw_calls().len();
                        }
                    }
                }
                black_box(draws);
            })
        });
    }
    group.finish();
}

fn config() -> Criterion {
    Criterion::default().measurement_time(Duration::from_secs(5)).sample_size(50)
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_dispatch_lookup, bench_paint_sweep
}
criterion_main!(benches);
