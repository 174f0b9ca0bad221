use harmoniq_eq::Filter;

/// Filters an interleaved buffer in place, one filter per channel.
///
/// Sample `i` belongs to channel `i % filters.len()`. A trailing partial
/// frame is filtered like any other sample of its channel.
pub fn filter_interleaved(samples: &mut [f64], filters: &mut [Filter]) {
    let channels = filters.len();
    if channels == 0 {
        return;
    }
    for frame in samples.chunks_mut(channels) {
        for (sample, filter) in frame.iter_mut().zip(filters.iter_mut()) {
            *sample = filter.apply(*sample);
        }
    }
}
