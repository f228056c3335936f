// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, Criterion};
use hearth_core::event::{Event, EventCategory, ListenerRegistry, ListenerScope, Propagation};
use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

fn bench_dispatch(c: &mut Criterion) {
    let registry = ListenerRegistry::new();
    let mut scope = ListenerScope::bind(&registry);
    let hits = Rc::new(Cell::new(0u64));

    // 64 listeners on the hot category, plus noise on others.
    for _ in 0..64 {
        let hits = Rc::clone(&hits);
        registry.register(&mut scope, EventCategory::KEY_DOWN, move |event: &Event| {
            hits.set(hits.get() + u64::from(event.keycode().unwrap_or(0)));
            Propagation::Continue
        });
    }
    for _ in 0..256 {
        registry.register(&mut scope, EventCategory::KEY_UP, |_: &Event| {
            Propagation::Continue
        });
    }

    let mut group = c.benchmark_group("Event Dispatch");

    group.bench_function("Immediate (64 listeners)", |b| {
        let event = Event::key_down(1, 1, 0);
        b.iter(|| {
            registry.dispatch(black_box(&event));
        });
    });

    group.bench_function("Queued drain (16 events x 64 listeners)", |b| {
        b.iter(|| {
            for i in 0..16 {
                registry.enqueue(Event::key_down(i, 0, 0));
            }
            black_box(registry.dispatch_pending());
        });
    });

    group.finish();
    black_box(hits.get());
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
