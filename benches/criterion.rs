// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use ownprop_vm::{
    ecmascript::{
        abstract_operations::operations_on_objects::create_data_property_or_throw,
        builtins::ordinary_object_create_with_intrinsics,
        execution::{Agent, DefaultHostHooks, LegacyHost, Options, ProtoIntrinsics},
        types::{PropertyKey, Value},
    },
    get_own_property_descriptor,
};

fn agent_with_target(options: Options, host: &'static LegacyHost) -> (Agent, Value, Value) {
    let mut agent = Agent::new(options, host);
    let obj = ordinary_object_create_with_intrinsics(&mut agent, Some(ProtoIntrinsics::Object));
    let key = PropertyKey::from_str(&mut agent, "answer");
    create_data_property_or_throw(&mut agent, obj.into(), key, Value::Number(42.0)).unwrap();
    let key = Value::from_str(&mut agent, "answer");
    (agent, obj.into(), key)
}

macro_rules! bench_hosts {
    ($($label:literal => ($host:expr, $force_fallback:expr),)*) => {
        fn bench_lookup(c: &mut Criterion) {
            $(
                {
                    static HOST: LegacyHost = $host;
                    let options = Options { force_fallback: $force_fallback };
                    let (mut agent, obj, key) = agent_with_target(options, &HOST);
                    c.bench_function(concat!($label, " (Lookup)"), |b| {
                        b.iter(|| {
                            get_own_property_descriptor(&mut agent, black_box(obj), black_box(key))
                                .unwrap()
                        })
                    });
                    let string = Value::from_str(&mut agent, "ownprop");
                    let index = Value::from_str(&mut agent, "3");
                    c.bench_function(concat!($label, " (String index)"), |b| {
                        b.iter(|| {
                            get_own_property_descriptor(
                                &mut agent,
                                black_box(string),
                                black_box(index),
                            )
                        })
                    });
                }
            )*
        }
    };
}

bench_hosts!(
    "native" => (LegacyHost::Evergreen, false),
    "wrapped" => (LegacyHost::Es5, false),
    "fallback" => (LegacyHost::Es3, false),
    "forced fallback" => (LegacyHost::Evergreen, true),
);

fn bench_probe(c: &mut Criterion) {
    c.bench_function("probe (Agent::new)", |b| {
        b.iter_batched(
            Options::default,
            |options| Agent::new(options, &DefaultHostHooks),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_lookup, bench_probe);
criterion_main!(benches);
