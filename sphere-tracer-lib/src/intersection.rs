//
// intersection.rs: Ray/object intersection records and the ordered
// list they collect into.
//

/// Stable identifier of a sphere within a scene's arena. Hits refer
/// to objects by index rather than by reference, so reallocating the
/// arena never dangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SphereId(pub usize);

/// A single ray/object intersection: the t parameter along the ray
/// and the object that was hit.
#[derive(Clone, Copy, Debug)]
pub struct Intersection {
    pub t: f32,
    pub object: SphereId,
}

/// Intersections collected for one ray cast, kept sorted ascending
/// by t. Built fresh per cast, consumed by `hit`, then discarded.
#[derive(Clone, Debug, Default)]
pub struct Intersections {
    hits: Vec<Intersection>,
}

impl Intersections {
    pub fn new() -> Intersections {
        Intersections { hits: Vec::new() }
    }

    /// Insert an intersection, keeping the list sorted ascending.
    pub fn push(&mut self, t: f32, object: SphereId) {
        let at = self.hits.partition_point(|i| i.t < t);
        self.hits.insert(at, Intersection { t, object });
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Intersection> {
        self.hits.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intersection> {
        self.hits.iter()
    }

    /// The first intersection with strictly positive t, i.e. the
    /// nearest one in front of the ray origin. Hits at or behind the
    /// origin (t <= 0) never count. Relies on the list being sorted;
    /// no sorting happens here.
    pub fn hit(&self) -> Option<&Intersection> {
        self.hits.iter().find(|i| i.t > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::floats_equal;

    #[test]
    fn push_keeps_the_list_sorted() {
        let mut xs = Intersections::new();
        xs.push(5.0, SphereId(0));
        xs.push(7.0, SphereId(0));
        xs.push(-3.0, SphereId(0));
        xs.push(2.0, SphereId(0));
        let ts: Vec<f32> = xs.iter().map(|i| i.t).collect();
        assert_eq!(ts, vec![-3.0, 2.0, 5.0, 7.0]);
    }

    #[test]
    fn hit_with_all_positive_t_is_the_lowest() {
        let mut xs = Intersections::new();
        xs.push(1.0, SphereId(0));
        xs.push(2.0, SphereId(0));
        let hit = xs.hit().unwrap();
        assert!(floats_equal(hit.t, 1.0));
    }

    #[test]
    fn hit_skips_negative_t() {
        let mut xs = Intersections::new();
        xs.push(-1.0, SphereId(0));
        xs.push(1.0, SphereId(0));
        let hit = xs.hit().unwrap();
        assert!(floats_equal(hit.t, 1.0));
    }

    #[test]
    fn hit_with_all_negative_t_is_none() {
        let mut xs = Intersections::new();
        xs.push(-2.0, SphereId(0));
        xs.push(-1.0, SphereId(0));
        assert!(xs.hit().is_none());
    }

    #[test]
    fn hit_excludes_t_of_exactly_zero() {
        let mut xs = Intersections::new();
        xs.push(0.0, SphereId(0));
        xs.push(3.0, SphereId(0));
        let hit = xs.hit().unwrap();
        assert!(floats_equal(hit.t, 3.0));
    }
}
