use crate::outcome::core::Outcome;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Outcome::Success(value) => Iter { inner: Some(value) },
            _ => Iter { inner: None },
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Outcome::Success(value) => IterMut { inner: Some(value) },
            _ => IterMut { inner: None },
        }
    }
}

/// Collects an iterator of outcomes into an outcome of a collection,
/// stopping at the first failure.
///
/// Mirrors the `FromIterator` behavior of `core::result::Result`: elements
/// after the first failure are not drawn from the iterator.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     [Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
///
/// let short: Outcome<Vec<i32>, &str> =
///     [Outcome::success(1), Outcome::failure("boom")].into_iter().collect();
/// assert_eq!(short.into_error(), Some("boom"));
/// ```
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        struct Shunt<'a, I, E> {
            iter: I,
            failure: &'a mut Option<E>,
        }

        impl<T, E, I> Iterator for Shunt<'_, I, E>
        where
            I: Iterator<Item = Outcome<T, E>>,
        {
            type Item = T;

            fn next(&mut self) -> Option<Self::Item> {
                match self.iter.next() {
                    Some(Outcome::Success(value)) => Some(value),
                    Some(Outcome::Failure(error)) => {
                        *self.failure = Some(error);
                        None
                    }
                    None => None,
                }
            }
        }

        let mut failure = None;
        let collected: V = Shunt {
            iter: iter.into_iter(),
            failure: &mut failure,
        }
        .collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}
