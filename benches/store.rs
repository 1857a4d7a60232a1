use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use device_registry::{Device, DeviceStore};

fn seeded_store(size: usize) -> DeviceStore {
    let store = DeviceStore::new();
    for i in 0..size {
        store
            .create(Device::new(i.to_string(), "model1", "1.1.1.1"))
            .unwrap();
    }
    store
}

fn benchmark_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("DeviceStore");

    for size in [1, 100, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("get", size), size, |b, &size| {
            let store = seeded_store(size);
            let serial_num = (size / 2).to_string();
            b.iter(|| store.get(black_box(&serial_num)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("create", size), size, |b, &size| {
            b.iter_batched(
                || (seeded_store(size), Device::new("new", "model1", "1.1.1.1")),
                |(store, device)| {
                    store.create(black_box(device)).unwrap();
                    store
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("update", size), size, |b, &size| {
            let store = seeded_store(size);
            let replacement = Device::new((size / 2).to_string(), "model2", "1.1.1.2");
            b.iter(|| store.update(black_box(replacement.clone())).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("delete", size), size, |b, &size| {
            b.iter_batched(
                || seeded_store(size),
                |store| {
                    store.delete(black_box("0")).unwrap();
                    store
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn benchmark_crud_cycle(c: &mut Criterion) {
    let store = seeded_store(1_000);
    let device = Device::new("cycle", "model1", "1.1.1.1");
    let replacement = Device::new("cycle", "model2", "1.1.1.2");

    c.bench_function("DeviceStore/crud_cycle", |b| {
        b.iter(|| {
            store.create(black_box(device.clone())).unwrap();
            black_box(store.get("cycle").unwrap());
            store.update(black_box(replacement.clone())).unwrap();
            store.delete(black_box("cycle")).unwrap();
        });
    });
}

criterion_group!(benches, benchmark_store, benchmark_crud_cycle);
criterion_main!(benches);
