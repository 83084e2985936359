use ndarray::{ArrayD, IxDyn};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::{DispatchConfig, ErrorPolicy};
use super::op::{BinaryOp, NaryOp, OpOutput, ParamOp, UnaryOp};
use crate::algorithm::broadcasting::{
    broadcast_shapes, broadcast_view, unravel_index, Broadcastable,
};
use crate::error::{ElementFailure, GeoshapeError, OperationFailures, Result};
use crate::geometry::Geometry;

/// Applies operations elementwise across broadcast operands.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Apply a unary operation to every present element of `geoms`.
    pub fn apply_unary<'a, Op>(
        &self,
        op: &Op,
        geoms: impl Into<Broadcastable<'a, Geometry>>,
    ) -> Result<<Op::Output as OpOutput>::Array>
    where
        Op: UnaryOp,
    {
        let geoms = geoms.into();
        let shape = broadcast_shapes(&[geoms.shape()])?;

        let view = geoms.view();
        let inputs = broadcast_view(&view, &shape)?
            .into_iter()
            .map(Option::as_ref)
            .collect();

        let values = self.evaluate(op.name(), &shape, inputs, |geom: &Geometry| {
            op.call(geom.native())
        })?;
        Ok(<Op::Output as OpOutput>::collect(values))
    }

    /// Apply a binary operation to every pair of present elements of the broadcast
    /// operands.
    pub fn apply_binary<'a, 'b, Op>(
        &self,
        op: &Op,
        left: impl Into<Broadcastable<'a, Geometry>>,
        right: impl Into<Broadcastable<'b, Geometry>>,
    ) -> Result<<Op::Output as OpOutput>::Array>
    where
        Op: BinaryOp,
    {
        let (left, right) = (left.into(), right.into());
        let shape = broadcast_shapes(&[left.shape(), right.shape()])?;

        let (left_view, right_view) = (left.view(), right.view());
        let inputs = broadcast_view(&left_view, &shape)?
            .into_iter()
            .zip(broadcast_view(&right_view, &shape)?)
            .map(|(l, r)| Some((l.as_ref()?, r.as_ref()?)))
            .collect();

        let values = self.evaluate(
            op.name(),
            &shape,
            inputs,
            |(l, r): (&Geometry, &Geometry)| op.call(l.native(), r.native()),
        )?;
        Ok(<Op::Output as OpOutput>::collect(values))
    }

    /// Apply an operation taking a primitive parameter, which is broadcast like any other
    /// operand.
    pub fn apply_with_param<'a, 'b, P, Op>(
        &self,
        op: &Op,
        geoms: impl Into<Broadcastable<'a, Geometry>>,
        param: impl Into<Broadcastable<'b, P>>,
    ) -> Result<<Op::Output as OpOutput>::Array>
    where
        P: Sync + 'b,
        Op: ParamOp<P>,
    {
        let (geoms, param) = (geoms.into(), param.into());
        let shape = broadcast_shapes(&[geoms.shape(), param.shape()])?;

        let (geom_view, param_view) = (geoms.view(), param.view());
        let inputs = broadcast_view(&geom_view, &shape)?
            .into_iter()
            .zip(broadcast_view(&param_view, &shape)?)
            .map(|(g, p)| Some((g.as_ref()?, p.as_ref()?)))
            .collect();

        let values = self.evaluate(op.name(), &shape, inputs, |(g, p): (&Geometry, &P)| {
            op.call(g.native(), p)
        })?;
        Ok(<Op::Output as OpOutput>::collect(values))
    }

    /// Apply an operation over any positive number of operands, all broadcast together.
    pub fn apply_nary<'a, Op>(
        &self,
        op: &Op,
        operands: &[Broadcastable<'a, Geometry>],
    ) -> Result<<Op::Output as OpOutput>::Array>
    where
        Op: NaryOp,
    {
        if operands.is_empty() {
            return Err(GeoshapeError::InvalidArgument(format!(
                "{} needs at least one operand",
                op.name()
            )));
        }

        let shapes: Vec<&[usize]> = operands.iter().map(|operand| operand.shape()).collect();
        let shape = broadcast_shapes(&shapes)?;

        let views: Vec<_> = operands.iter().map(|operand| operand.view()).collect();
        let mut columns = views
            .iter()
            .map(|view| Ok(broadcast_view(view, &shape)?.into_iter()))
            .collect::<Result<Vec<_>>>()?;

        let len = shape.iter().product();
        let inputs = (0..len)
            .map(|_| {
                // Advance every column before checking for missing values.
                let row: Vec<Option<&Geometry>> = columns
                    .iter_mut()
                    .map(|column| column.next().and_then(Option::as_ref))
                    .collect();
                row.into_iter().collect::<Option<Vec<_>>>()
            })
            .collect();

        let values = self.evaluate(op.name(), &shape, inputs, |geoms: Vec<&Geometry>| {
            let natives: Vec<&geos::Geometry> = geoms.iter().map(|g| g.native()).collect();
            op.call(&natives)
        })?;
        Ok(<Op::Output as OpOutput>::collect(values))
    }

    /// Run `f` on every present input and apply the error policy to the results.
    fn evaluate<I, R, F>(
        &self,
        operation: &'static str,
        shape: &[usize],
        inputs: Vec<Option<I>>,
        f: F,
    ) -> Result<ArrayD<Option<R::Element>>>
    where
        I: Send,
        R: OpOutput,
        F: Fn(I) -> Result<R> + Sync + Send,
    {
        debug!(operation, elements = inputs.len(), ?shape, "dispatching");

        let results = self.map_elements(inputs, |input| {
            input.map(|input| f(input).and_then(|output| output.finish()))
        });

        let mut failures = vec![];
        let values: Vec<_> = results
            .into_iter()
            .enumerate()
            .map(|(i, result)| match result {
                None => None,
                Some(Ok(value)) => Some(value),
                Some(Err(err)) => {
                    failures.push(ElementFailure {
                        index: unravel_index(i, shape),
                        message: err.to_string(),
                    });
                    None
                }
            })
            .collect();

        if !failures.is_empty() {
            match self.config.error_policy {
                ErrorPolicy::Raise => {
                    return Err(OperationFailures {
                        operation,
                        failures,
                    }
                    .into())
                }
                ErrorPolicy::Missing => {
                    warn!(
                        operation,
                        failed = failures.len(),
                        "failed elements replaced with missing values"
                    );
                }
            }
        }

        Ok(ArrayD::from_shape_vec(IxDyn(shape), values)?)
    }

    fn map_elements<I, T, F>(&self, inputs: Vec<I>, f: F) -> Vec<T>
    where
        I: Send,
        T: Send,
        F: Fn(I) -> T + Sync + Send,
    {
        #[cfg(feature = "rayon")]
        {
            if self.config.parallel && inputs.len() >= self.config.parallel_threshold {
                return inputs.into_par_iter().map(f).collect();
            }
        }

        inputs.into_iter().map(f).collect()
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use geos::Geom;

    use super::*;
    use crate::array::GeometryArray;
    use crate::test::{p0, p1, p2, unit_square};

    struct CountingContains<'c> {
        calls: &'c AtomicUsize,
    }

    impl BinaryOp for CountingContains<'_> {
        type Output = bool;

        fn name(&self) -> &'static str {
            "counting_contains"
        }

        fn call(&self, left: &geos::Geometry, right: &geos::Geometry) -> Result<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(left.contains(right)?)
        }
    }

    struct CountingArea<'c> {
        calls: &'c AtomicUsize,
    }

    impl UnaryOp for CountingArea<'_> {
        type Output = f64;

        fn name(&self) -> &'static str {
            "counting_area"
        }

        fn call(&self, geom: &geos::Geometry) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(geom.area()?)
        }
    }

    /// Fails on points and reports the number of coordinates otherwise.
    struct RejectPoints;

    impl UnaryOp for RejectPoints {
        type Output = f64;

        fn name(&self) -> &'static str {
            "reject_points"
        }

        fn call(&self, geom: &geos::Geometry) -> Result<f64> {
            if geom.geometry_type() == geos::GeometryTypes::Point {
                return Err(GeoshapeError::InvalidArgument("point".to_string()));
            }
            Ok(geom.get_num_coordinates()? as f64)
        }
    }

    struct Scale;

    impl ParamOp<f64> for Scale {
        type Output = f64;

        fn name(&self) -> &'static str {
            "scale"
        }

        fn call(&self, geom: &geos::Geometry, factor: &f64) -> Result<f64> {
            Ok(geom.area()? * factor)
        }
    }

    struct CountPresent;

    impl NaryOp for CountPresent {
        type Output = f64;

        fn name(&self) -> &'static str {
            "count_present"
        }

        fn call(&self, geoms: &[&geos::Geometry]) -> Result<f64> {
            Ok(geoms.len() as f64)
        }
    }

    fn squares(offsets: &[f64]) -> Vec<Option<Geometry>> {
        offsets
            .iter()
            .map(|&o| {
                Some(
                    Geometry::polygon(
                        &[(o, 0.), (o + 1., 0.), (o + 1., 1.), (o, 1.), (o, 0.)],
                        &[],
                    )
                    .unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn column_against_row() {
        let calls = AtomicUsize::new(0);
        let regions = GeometryArray::from_shape_vec(&[3, 1], squares(&[0., 1., 2.])).unwrap();
        let points: Vec<_> = [0.5, 1.5, 2.5, 3.5]
            .iter()
            .map(|&x| Some(Geometry::point(x, 0.5).unwrap()))
            .collect();
        let points = GeometryArray::from_shape_vec(&[1, 4], points).unwrap();

        let out = Dispatcher::default()
            .apply_binary(&CountingContains { calls: &calls }, &regions, &points)
            .unwrap();

        assert_eq!(out.shape(), &[3, 4]);
        assert_eq!(calls.load(Ordering::SeqCst), 12);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(out[[i, j]], Some(i == j), "({i}, {j})");
            }
        }
    }

    #[test]
    fn missing_inputs_skip_the_call() {
        let calls = AtomicUsize::new(0);
        let arr = GeometryArray::from_vec(vec![Some(unit_square()), None, Some(unit_square())]);

        let out = Dispatcher::default()
            .apply_unary(&CountingArea { calls: &calls }, &arr)
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![Some(1.), None, Some(1.)]);
    }

    #[test]
    fn missing_scalar_masks_everything() {
        let calls = AtomicUsize::new(0);
        let out = Dispatcher::default()
            .apply_binary(
                &CountingContains { calls: &calls },
                Broadcastable::<Geometry>::missing(),
                &crate::test::point_array(),
            )
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn scalar_region_against_points() {
        let calls = AtomicUsize::new(0);
        let points = GeometryArray::from_vec(vec![Some(p0()), Some(p1()), Some(p2())]);

        let out = Dispatcher::default()
            .apply_binary(&CountingContains { calls: &calls }, unit_square(), &points)
            .unwrap();

        assert_eq!(
            out.iter().copied().collect::<Vec<_>>(),
            vec![Some(true), Some(false), Some(true)]
        );
    }

    #[test]
    fn all_scalar_operands_give_zero_dimensions() {
        let calls = AtomicUsize::new(0);
        let out = Dispatcher::default()
            .apply_binary(&CountingContains { calls: &calls }, unit_square(), p0())
            .unwrap();
        assert_eq!(out.ndim(), 0);
        assert_eq!(out.iter().next(), Some(&Some(true)));
    }

    #[test]
    fn shape_mismatch_before_any_call() {
        let calls = AtomicUsize::new(0);
        let three = GeometryArray::from_vec(squares(&[0., 1., 2.]));
        let four = GeometryArray::from_vec(squares(&[0., 1., 2., 3.]));

        let result =
            Dispatcher::default().apply_binary(&CountingContains { calls: &calls }, &three, &four);

        assert!(matches!(result, Err(GeoshapeError::ShapeMismatch { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn raise_lists_every_failure() {
        let arr = GeometryArray::from_vec(vec![
            Some(p0()),
            Some(unit_square()),
            Some(p1()),
        ]);

        let err = Dispatcher::default()
            .apply_unary(&RejectPoints, &arr)
            .unwrap_err();

        match err {
            GeoshapeError::Operation(failures) => {
                assert_eq!(failures.operation, "reject_points");
                assert_eq!(failures.indices(), vec![&[0][..], &[2][..]]);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn missing_policy_keeps_siblings() {
        let arr = GeometryArray::from_vec(vec![
            Some(p0()),
            Some(unit_square()),
            Some(p1()),
        ]);
        let dispatcher =
            Dispatcher::new(DispatchConfig::default().with_error_policy(ErrorPolicy::Missing));

        let out = dispatcher.apply_unary(&RejectPoints, &arr).unwrap();

        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![None, Some(5.), None]);
    }

    #[test]
    fn parameters_broadcast() {
        let arr = GeometryArray::from_vec(squares(&[0., 5.]));
        let out = Dispatcher::default()
            .apply_with_param(&Scale, &arr, vec![2., 3.])
            .unwrap();
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![Some(2.), Some(3.)]);

        let out = Dispatcher::default()
            .apply_with_param(&Scale, &arr, Broadcastable::<f64>::missing())
            .unwrap();
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn nary_broadcasts_every_operand() {
        let column = GeometryArray::from_shape_vec(&[2, 1], squares(&[0., 1.])).unwrap();
        let row = GeometryArray::from_vec(vec![Some(p0()), None, Some(p2())]);
        let operands = [
            Broadcastable::from(&column),
            Broadcastable::from(&row),
            Broadcastable::from(p1()),
        ];

        let out = Dispatcher::default().apply_nary(&CountPresent, &operands).unwrap();

        assert_eq!(out.shape(), &[2, 3]);
        assert_eq!(out[[0, 0]], Some(3.));
        assert_eq!(out[[1, 1]], None);
        assert_eq!(out[[1, 2]], Some(3.));
    }

    #[test]
    fn nary_needs_operands() {
        let result = Dispatcher::default().apply_nary(&CountPresent, &[]);
        assert!(matches!(result, Err(GeoshapeError::InvalidArgument(_))));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_keeps_order() {
        let arr = GeometryArray::from_vec(squares(&(0..64).map(f64::from).collect::<Vec<_>>()));
        let dispatcher = Dispatcher::new(
            DispatchConfig::default()
                .with_parallel(true)
                .with_parallel_threshold(1),
        );
        let factors: Vec<f64> = (0..64).map(f64::from).collect();
        let out = dispatcher.apply_with_param(&Scale, &arr, factors).unwrap();
        for (i, value) in out.iter().enumerate() {
            assert_eq!(*value, Some(i as f64));
        }
    }
}
