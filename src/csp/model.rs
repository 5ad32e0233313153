//! N-Queens constraint model: variables, domains, adjacency, assignments.

use rand::seq::SliceRandom;
use rand::Rng;

use super::conflict::conflicts;

/// A partial or total mapping from variable (column) to value (row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<Option<usize>>,
}

impl Assignment {
    /// An empty assignment over `n` variables.
    pub fn new(n: usize) -> Self {
        Self {
            values: vec![None; n],
        }
    }

    /// Value of `var`, if assigned.
    pub fn get(&self, var: usize) -> Option<usize> {
        self.values[var]
    }

    /// Assigns (or reassigns) `var`.
    pub fn set(&mut self, var: usize, value: usize) {
        self.values[var] = Some(value);
    }

    /// Number of variables covered by this assignment.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the assignment covers no variables at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every variable has a value.
    pub fn is_total(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// The values in variable order, or `None` while any variable is unset.
    pub fn to_values(&self) -> Option<Vec<usize>> {
        self.values.iter().copied().collect()
    }
}

/// The N-Queens CSP: one variable per column, domain `0..n` each, every
/// pair of variables constrained.
#[derive(Debug, Clone)]
pub struct NQueensCsp {
    variables: Vec<usize>,
    domains: Vec<Vec<usize>>,
    adjacency: Vec<Vec<usize>>,
}

impl NQueensCsp {
    /// Builds the model for an `n`×`n` board.
    pub fn new(n: usize) -> Self {
        let variables: Vec<usize> = (0..n).collect();
        let domains = (0..n).map(|_| (0..n).collect()).collect();
        let adjacency = (0..n)
            .map(|i| (0..n).filter(|&j| j != i).collect())
            .collect();
        Self {
            variables,
            domains,
            adjacency,
        }
    }

    /// Board size.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the board has no columns.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variable indices `0..n`, one per column.
    pub fn variables(&self) -> &[usize] {
        &self.variables
    }

    /// Current (possibly shuffled) domain of `var`.
    pub fn domain(&self, var: usize) -> &[usize] {
        &self.domains[var]
    }

    /// Variables constrained against `var`.
    pub fn neighbors(&self, var: usize) -> &[usize] {
        &self.adjacency[var]
    }

    /// Number of assigned neighbors that conflict with `var = value`.
    pub fn n_conflicts(&self, var: usize, value: usize, assignment: &Assignment) -> usize {
        self.adjacency[var]
            .iter()
            .filter_map(|&other| assignment.get(other).map(|v| (other, v)))
            .filter(|&(other, v)| conflicts(var, value, other, v))
            .count()
    }

    /// Assigned variables with at least one conflict, in variable order.
    pub fn conflicted_variables(&self, assignment: &Assignment) -> Vec<usize> {
        self.variables
            .iter()
            .copied()
            .filter(|&var| {
                assignment
                    .get(var)
                    .is_some_and(|value| self.n_conflicts(var, value, assignment) > 0)
            })
            .collect()
    }

    /// The value of `var` with the fewest conflicts against `assignment`.
    ///
    /// The domain is shuffled first so ties break randomly; among equal
    /// counts the first value in shuffled order wins.
    pub fn min_conflicts_value<R: Rng>(
        &mut self,
        var: usize,
        assignment: &Assignment,
        rng: &mut R,
    ) -> usize {
        self.domains[var].shuffle(rng);
        self.domains[var]
            .iter()
            .copied()
            .min_by_key(|&value| self.n_conflicts(var, value, assignment))
            .expect("domains of a non-empty board are never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn assignment(values: &[usize]) -> Assignment {
        let mut a = Assignment::new(values.len());
        for (var, &value) in values.iter().enumerate() {
            a.set(var, value);
        }
        a
    }

    #[test]
    fn test_model_shape() {
        let csp = NQueensCsp::new(5);
        assert_eq!(csp.len(), 5);
        assert_eq!(csp.variables(), &[0, 1, 2, 3, 4]);
        for var in 0..5 {
            assert_eq!(csp.domain(var), &[0, 1, 2, 3, 4]);
            assert_eq!(csp.neighbors(var).len(), 4);
            assert!(!csp.neighbors(var).contains(&var));
        }
    }

    #[test]
    fn test_assignment_totality() {
        let mut a = Assignment::new(3);
        assert!(!a.is_total());
        assert_eq!(a.to_values(), None);
        a.set(0, 2);
        a.set(1, 0);
        assert!(!a.is_total());
        a.set(2, 1);
        assert!(a.is_total());
        assert_eq!(a.to_values(), Some(vec![2, 0, 1]));
    }

    #[test]
    fn test_n_conflicts_ignores_unassigned() {
        let csp = NQueensCsp::new(4);
        let mut a = Assignment::new(4);
        a.set(0, 0);
        // Same row as column 0, the only assigned neighbor.
        assert_eq!(csp.n_conflicts(1, 0, &a), 1);
        // Diagonal from (0, 0).
        assert_eq!(csp.n_conflicts(2, 2, &a), 1);
        assert_eq!(csp.n_conflicts(1, 2, &a), 0);
    }

    #[test]
    fn test_conflicted_variables() {
        let csp = NQueensCsp::new(4);
        assert!(csp.conflicted_variables(&assignment(&[1, 3, 0, 2])).is_empty());
        assert_eq!(
            csp.conflicted_variables(&assignment(&[0, 0, 3, 1])),
            vec![0, 1]
        );
        assert_eq!(
            csp.conflicted_variables(&assignment(&[0, 1, 2, 3])),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_min_conflicts_value_finds_free_row() {
        let mut csp = NQueensCsp::new(4);
        let mut a = assignment(&[1, 3, 0, 2]);
        // Move column 3 away, then ask for its best row back.
        a.set(3, 0);
        let mut rng = create_rng(42);
        for _ in 0..20 {
            assert_eq!(csp.min_conflicts_value(3, &a, &mut rng), 2);
        }
    }

    #[test]
    fn test_min_conflicts_value_keeps_domain() {
        let mut csp = NQueensCsp::new(6);
        let a = Assignment::new(6);
        let mut rng = create_rng(8);
        csp.min_conflicts_value(2, &a, &mut rng);
        let mut domain = csp.domain(2).to_vec();
        domain.sort_unstable();
        assert_eq!(domain, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_min_conflicts_value_breaks_ties_randomly() {
        let mut csp = NQueensCsp::new(8);
        let a = Assignment::new(8);
        let mut rng = create_rng(5);
        let seen: std::collections::HashSet<usize> = (0..200)
            .map(|_| csp.min_conflicts_value(0, &a, &mut rng))
            .collect();
        assert!(seen.len() > 1, "ties always resolved to {seen:?}");
    }
}
