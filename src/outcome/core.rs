/// Fail-fast disjunction representing the outcome of a fallible operation.
///
/// `Outcome<T, E>` holds exactly one of a success value of type `T` or a
/// failure value of type `E`. Every combinator consumes the receiver and
/// returns a new `Outcome`; nothing is mutated in place, so values are freely
/// shareable once constructed.
///
/// A failure propagates unchanged through [`map`](Outcome::map),
/// [`and_then`](Outcome::and_then), [`zip`](Outcome::zip), and
/// [`combine`](crate::outcome::combine()) until explicitly intercepted by
/// [`analyze`](Outcome::analyze), [`recover`](Outcome::recover), or
/// [`or`](Outcome::or). The crate never interprets the failure value itself.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure value type
///
/// # Variants
///
/// * `Success(T)` - Contains the success value
/// * `Failure(E)` - Contains the failure value
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let success = Outcome::<i32, &str>::success(42);
/// assert!(success.is_success());
///
/// let failure = Outcome::<i32, &str>::failure("boom");
/// assert!(failure.is_failure());
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("missing field");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Classifies a two-part `(value, error)` pair into an outcome.
    ///
    /// This is the adapter for calling conventions that return a value slot
    /// and an error slot side by side. A present error wins regardless of the
    /// value slot; otherwise the value is unwrapped into a success.
    ///
    /// # Arguments
    ///
    /// * `value` - The value slot of the pair
    /// * `error` - The error slot of the pair
    ///
    /// # Panics
    ///
    /// Panics if both slots are `None`. The two-part convention guarantees a
    /// value whenever the error is absent; a pair carrying neither is a
    /// broken contract on the caller's side, not a representable outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::<i32, &str>::from_parts(Some(5), None);
    /// assert_eq!(ok.into_value(), Some(5));
    ///
    /// // The error slot takes priority over a populated value slot.
    /// let err = Outcome::from_parts(Some(5), Some("stale"));
    /// assert_eq!(err.into_error(), Some("stale"));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_parts(value: Option<T>, error: Option<E>) -> Self {
        match error {
            Some(error) => Self::Failure(error),
            None => Self::Success(
                value.expect("Outcome::from_parts requires a value when no error is present"),
            ),
        }
    }

    /// Invokes a fallible operation once and classifies its two-part return.
    ///
    /// The operation runs exactly once, eagerly, and its `(value, error)`
    /// pair is classified with the same policy as
    /// [`from_parts`](Outcome::from_parts).
    ///
    /// # Panics
    ///
    /// Panics if the operation returns `(None, None)`, as documented on
    /// [`from_parts`](Outcome::from_parts).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::attempt(|| (Some(5), None));
    /// assert_eq!(o.into_value(), Some(5));
    ///
    /// let o: Outcome<i32, &str> = Outcome::attempt(|| (None, Some("boom")));
    /// assert_eq!(o.into_error(), Some("boom"));
    /// ```
    #[inline]
    pub fn attempt<F>(op: F) -> Self
    where
        F: FnOnce() -> (Option<T>, Option<E>),
    {
        let (value, error) = op();
        Self::from_parts(value, error)
    }

    /// Wraps a `Result`, mapping `Ok` to `Success` and `Err` to `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// let o = Outcome::from_result(result);
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Returns `true` if the outcome holds a success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a failure value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure value, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Extracts the success value, if any.
    ///
    /// Returns `Some(value)` on success, `None` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure value, if any.
    ///
    /// Returns `Some(error)` on failure, `None` on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// assert_eq!(o.into_error(), Some("boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Decomposes the outcome into its two-part `(value, error)` form.
    ///
    /// Exactly one side of the pair is `Some`. This is the inverse of
    /// [`from_parts`](Outcome::from_parts) and the interop surface for
    /// callers bridging back into a value-slot/error-slot convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(5).into_parts(), (Some(5), None));
    /// assert_eq!(Outcome::<i32, &str>::failure("x").into_parts(), (None, Some("x")));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failure(error) => (None, Some(error)),
        }
    }

    /// Converts into a `Result`, mapping `Success` to `Ok` and `Failure` to `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_result(), Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Maps the success value using the provided function.
    ///
    /// A failure passes through unchanged under the new success type.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(21);
    /// let doubled = o.map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure value while preserving the success branch.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the failure value from type `E` to type `F`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// let mapped = o.map_err(|e| format!("operation failed: {}", e));
    /// assert_eq!(mapped.into_error(), Some("operation failed: boom".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a computation whose own outcome becomes the new outcome.
    ///
    /// `f` is invoked at most once, and only when the receiver is a success.
    /// A failure is returned unchanged without invoking `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next fallible step
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn checked_half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// let halved = Outcome::success(42).and_then(checked_half);
    /// assert_eq!(halved.into_value(), Some(21));
    ///
    /// let failed = Outcome::success(21).and_then(checked_half);
    /// assert!(failed.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Dispatches to exactly one of two handlers based on the variant.
    ///
    /// This is the unconditional fold over the disjunction: the matching
    /// handler runs, the other never does, and the handler's return is the
    /// result. [`and_then`](Outcome::and_then) is this operation with the
    /// failure handler fixed to re-wrap the error.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Handler invoked with the success value
    /// * `on_failure` - Handler invoked with the failure value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// let handled = o.analyze(
    ///     |value| Outcome::success(value * 2),
    ///     |_| Outcome::success(0),
    /// );
    /// assert_eq!(handled.into_value(), Some(0));
    /// ```
    #[must_use]
    #[inline]
    pub fn analyze<U, S, F>(self, on_success: S, on_failure: F) -> Outcome<U, E>
    where
        S: FnOnce(T) -> Outcome<U, E>,
        F: FnOnce(E) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns the success value, or the given fallback on failure.
    ///
    /// The fallback is evaluated eagerly by the caller. Use
    /// [`recover_with`](Outcome::recover_with) when building it is costly.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(42).recover(0), 42);
    /// assert_eq!(Outcome::<i32, &str>::failure("boom").recover(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn recover(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the success value, or computes a fallback from the failure.
    ///
    /// The closure runs only on the failure branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<usize, &str>::failure("boom");
    /// assert_eq!(o.recover_with(|e| e.len()), 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn recover_with<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Returns the receiver if it is a success, otherwise the alternative.
    ///
    /// The alternative is evaluated eagerly by the caller. Use
    /// [`or_else`](Outcome::or_else) when building it is costly.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// let recovered = o.or(Outcome::success(42));
    /// assert_eq!(recovered.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn or(self, alternative: Outcome<T, E>) -> Outcome<T, E> {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternative,
        }
    }

    /// Calls `op` with the failure value, otherwise returns the success unchanged.
    ///
    /// # Arguments
    ///
    /// * `op` - The function to call if the outcome is a failure
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("boom");
    /// let recovered = o.or_else(|_| Outcome::success(42));
    /// assert_eq!(recovered.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<F>(self, op: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> Outcome<T, E>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Combines two outcomes into a tuple, failing fast on the leftmost failure.
    ///
    /// If both are successes, returns a tuple of both values. Otherwise the
    /// first failure in left-to-right order is returned; a failure on the
    /// right is never observed when the left has already failed.
    ///
    /// # Arguments
    ///
    /// * `other` - Another outcome to pair with this one
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let paired = Outcome::<i32, &str>::success(1).zip(Outcome::success(2));
    /// assert_eq!(paired.into_value(), Some((1, 2)));
    ///
    /// let left = Outcome::<i32, &str>::failure("left");
    /// let right = Outcome::<i32, &str>::failure("right");
    /// assert_eq!(left.zip(right).into_error(), Some("left"));
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
            (Outcome::Failure(e), _) => Outcome::Failure(e),
            (_, Outcome::Failure(e)) => Outcome::Failure(e),
        }
    }
}
