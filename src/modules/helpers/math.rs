use std::cmp::Ordering;
use std::ops::Add;

pub struct Math {}
impl Math {
    pub fn round_float_to_n_decimals(number: f64, decimals: i32) -> f64 {
        let multiplier = 10.0_f64.powi(decimals);
        (number * multiplier).round() / multiplier
    }

    /// mean of the numbers, 0 for an empty list
    pub fn mean(nums: &[f64]) -> f64 {
        if nums.is_empty() {
            return 0.0;
        }

        let sum: f64 = nums.iter().sum();
        sum / nums.len() as f64
    }

    /// # cumulative series
    /// running total of a sequence of points. element `i` of the result is the
    /// sum of `points[0..=i]`.
    ///
    /// ## Arguments
    /// * `points` - the points per race
    ///
    /// ## Returns
    /// * `Vec<T>` - the running total, same length as the input
    pub fn cumulative_series<T>(points: &[T]) -> Vec<T>
    where
        T: Copy + Add<Output = T>,
    {
        let mut running: Option<T> = None;
        points
            .iter()
            .map(|&point| {
                let total = match running {
                    Some(previous) => previous + point,
                    None => point,
                };
                running = Some(total);
                total
            })
            .collect()
    }

    /// # points share
    /// the percentage `value` is of `total`. a total of 0 gives a share of 0.
    pub fn points_share(value: f64, total: f64) -> f64 {
        if total == 0.0 {
            return 0.0;
        }

        value / total * 100.0
    }

    /// # rank order
    /// sort a collection descending by a key. entities with equal keys keep
    /// the order they had in the input. keys that can not be compared to
    /// themselves (NaN) are ranked last.
    ///
    /// ## Arguments
    /// * `collection` - the entities to rank
    /// * `key` - extracts the value to rank on
    ///
    /// ## Returns
    /// * `Vec<T>` - the ranked entities
    pub fn rank_order<T, K, F>(collection: &[T], key: F) -> Vec<T>
    where
        T: Clone,
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        let mut ranked = collection.to_vec();
        ranked.sort_by(|a, b| {
            let (key_a, key_b) = (key(a), key(b));
            let a_ranked = key_a.partial_cmp(&key_a).is_some();
            let b_ranked = key_b.partial_cmp(&key_b).is_some();

            match (a_ranked, b_ranked) {
                (true, true) => key_b.partial_cmp(&key_a).unwrap_or(Ordering::Equal),
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => Ordering::Equal,
            }
        });
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_series_of_example_sequence() {
        assert_eq!(Math::cumulative_series(&[25, 18, 25, 18]), vec![25, 43, 68, 86]);
    }

    #[test]
    fn cumulative_series_keeps_length_and_ends_in_sum() {
        let sequences: [&[u32]; 4] = [
            &[0],
            &[1, 2, 3],
            &[25, 0, 0, 18, 12, 1],
            &[37, 30, 37, 33, 37, 33, 43, 37, 33, 18],
        ];

        for points in sequences {
            let series = Math::cumulative_series(points);
            assert_eq!(series.len(), points.len());
            assert_eq!(*series.last().unwrap(), points.iter().sum::<u32>());
        }
    }

    #[test]
    fn cumulative_series_of_nothing_is_empty() {
        let empty: [f64; 0] = [];
        assert!(Math::cumulative_series(&empty).is_empty());
    }

    #[test]
    fn points_share_with_zero_total_is_zero() {
        for value in [0.0, 1.0, 25.0, 1e9] {
            assert_eq!(Math::points_share(value, 0.0), 0.0);
        }
    }

    #[test]
    fn points_share_is_a_percentage() {
        assert_eq!(Math::points_share(25.0, 100.0), 25.0);
        assert_eq!(Math::points_share(10.0, 24.0), 10.0 / 24.0 * 100.0);
    }

    #[test]
    fn rank_order_is_descending_and_stable() {
        let entries = vec![("a", 10), ("b", 30), ("c", 10), ("d", 30), ("e", 20)];
        let ranked = Math::rank_order(&entries, |e| e.1);
        let names: Vec<&str> = ranked.iter().map(|e| e.0).collect();
        assert_eq!(names, vec!["b", "d", "e", "a", "c"]);
    }

    #[test]
    fn rank_order_is_idempotent() {
        let entries = vec![("a", 1.5), ("b", 3.0), ("c", 1.5), ("d", f64::NAN), ("e", 3.0)];
        let once = Math::rank_order(&entries, |e| e.1);
        let twice = Math::rank_order(&once, |e| e.1);
        let once_names: Vec<&str> = once.iter().map(|e| e.0).collect();
        let twice_names: Vec<&str> = twice.iter().map(|e| e.0).collect();
        assert_eq!(once_names, twice_names);
        assert_eq!(once_names, vec!["b", "e", "a", "c", "d"]);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(Math::mean(&[]), 0.0);
        assert_eq!(Math::mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn round_to_decimals() {
        assert_eq!(Math::round_float_to_n_decimals(21.456, 1), 21.5);
        assert_eq!(Math::round_float_to_n_decimals(3.14159, 3), 3.142);
    }
}
