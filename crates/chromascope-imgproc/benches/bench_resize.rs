use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chromascope_image::{Image, ImageSize};
use chromascope_imgproc::{fit::fit_to_viewport, interpolation::InterpolationMode, resize};

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    let viewport = ImageSize {
        width: 800,
        height: 600,
    };

    for (width, height) in [(256, 224), (1024, 896), (4000, 3000)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = ImageSize {
            width: *width,
            height: *height,
        };

        let image = Image::<u8, 3>::from_size_val(image_size, 128).unwrap();
        let placement = fit_to_viewport(image_size, viewport).unwrap();
        let mut fitted = Image::<u8, 3>::from_size_val(placement.size, 0).unwrap();

        for mode in [InterpolationMode::Bilinear, InterpolationMode::Nearest] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), &parameter_string),
                &image,
                |b, i| {
                    b.iter(|| {
                        resize::resize_native(black_box(i), black_box(&mut fitted), mode).unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
