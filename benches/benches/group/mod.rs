pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $classifier: path) => {
        #[inline(never)]
        fn $test(classifier: &RangeClassifier<u16, u32>, source: &str) -> u32
        {
            source
                .chars()
                .map(|c| classifier.classify(c).2 as u32)
                .fold(0, u32::wrapping_add)
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let table = unicode_segmentation_benches::table(&TablesConfig::default()).unwrap();
            let classifier = $classifier(&table);

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for data in unicode_segmentation_benches::texts() {
                let text_name = data.0.as_str();
                let text = data.1.as_str();

                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    &(&classifier, text),
                    |b, data| b.iter(|| $test(data.0, criterion::black_box(data.1))),
                );
            }

            group.finish();
        }
    };
}
