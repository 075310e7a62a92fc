//! The merge engine.
//!
//! Per scope, in order: copy discovered functions verbatim, instantiate
//! added functions (resolving every textual type through the registry),
//! then apply directives by normalized key with an exactly-one-match rule.
//! Any failure aborts that scope only; the scope keeps its discovered
//! functions untouched and the failure is recorded in the report.

use apiextractor_core::{
    AddedFunction, Directive, FunctionKind, MergeError, MetaArgument, MetaClass, MetaFunction,
    MetaGraph, MetaType, Scope, ScopeId, TypePosition, TypeUse, VARARGS_TYPE_NAME,
};
use apiextractor_registry::{DirectiveStore, TypeRegistry};

use crate::report::MergeReport;
use crate::skeleton::{DiscoveredFunction, Skeleton};

/// Merges the parsed-source skeleton with the directive store against the
/// type registry.
///
/// Both inputs are read-only; the merger holds references for the duration
/// of one [`merge`](MetadataMerger::merge) run.
pub struct MetadataMerger<'a> {
    store: &'a DirectiveStore,
    registry: &'a TypeRegistry,
}

impl<'a> MetadataMerger<'a> {
    /// Create a merger over a populated store and registry.
    pub fn new(store: &'a DirectiveStore, registry: &'a TypeRegistry) -> Self {
        Self { store, registry }
    }

    /// Merge every scope of the skeleton.
    ///
    /// Scopes are independent: a failed scope is reported and falls back to
    /// its discovered functions, unrelated scopes merge normally. The
    /// returned graph always contains every scope of the skeleton.
    pub fn merge(&self, skeleton: &Skeleton) -> (MetaGraph, MergeReport) {
        let mut graph = MetaGraph::new();
        let mut report = MergeReport::new();

        for class in &skeleton.classes {
            let id = graph.add_class(MetaClass::new(&class.name));
            graph.class_mut(id).type_ref = self.registry.type_ref(&class.name);

            let scope = Scope::class(&class.name);
            match self.merge_scope(&scope, Some(id), &class.functions) {
                Ok(functions) => {
                    graph.class_mut(id).functions = functions;
                    report.record_success(scope);
                }
                Err(error) => {
                    graph.class_mut(id).functions = discovered_only(Some(id), &class.functions);
                    report.record_failure(scope, error);
                }
            }
        }

        let scope = Scope::Module;
        match self.merge_scope(&scope, None, &skeleton.module_functions) {
            Ok(functions) => {
                *graph.module_functions_mut() = functions;
                report.record_success(scope);
            }
            Err(error) => {
                *graph.module_functions_mut() = discovered_only(None, &skeleton.module_functions);
                report.record_failure(scope, error);
            }
        }

        (graph, report)
    }

    /// Assemble and modify one scope's function list.
    fn merge_scope(
        &self,
        scope: &Scope,
        owner: Option<ScopeId>,
        discovered: &[DiscoveredFunction],
    ) -> Result<Vec<MetaFunction>, MergeError> {
        // Step 1: discovered functions, verbatim, in source order.
        let mut functions = discovered_only(owner, discovered);

        // Step 2: added functions, appended after the discovered ones.
        for added in self.store.added_functions(scope) {
            functions.push(self.instantiate_added(scope, owner, added)?);
        }

        // Step 3: directives, each addressing exactly one function.
        for (key, directives) in self.store.directives_in_scope(scope) {
            let matches: Vec<usize> = functions
                .iter()
                .enumerate()
                .filter(|(_, f)| f.normalized_signature() == key)
                .map(|(i, _)| i)
                .collect();

            if matches.len() != 1 {
                let candidates = if matches.is_empty() {
                    functions.iter().map(|f| f.normalized_signature()).collect()
                } else {
                    matches
                        .iter()
                        .map(|&i| functions[i].normalized_signature())
                        .collect()
                };
                return Err(MergeError::UnresolvedDirective {
                    scope: scope.to_string(),
                    directive: directives[0].kind_name(),
                    key: key.to_string(),
                    matched: matches.len(),
                    candidates,
                });
            }

            let target = &mut functions[matches[0]];
            for directive in directives {
                apply_directive(scope, target, directive)?;
            }
        }

        Ok(functions)
    }

    /// Resolve an added-function descriptor into a graph node.
    fn instantiate_added(
        &self,
        scope: &Scope,
        owner: Option<ScopeId>,
        added: &AddedFunction,
    ) -> Result<MetaFunction, MergeError> {
        let descriptor = &added.descriptor;

        // Constructor iff the name equals the owning class name and no
        // return type was supplied.
        let kind = match scope.class_name() {
            Some(class_name)
                if descriptor.return_type.is_none() && descriptor.name == class_name =>
            {
                FunctionKind::Constructor
            }
            _ => FunctionKind::Normal,
        };

        let mut function = MetaFunction::new(descriptor.name.clone(), kind);
        function.visibility = added.attributes.visibility;
        function.traits.is_static = added.attributes.is_static;
        function.traits.is_user_added = true;
        function.is_const_qualified = descriptor.is_const_qualified;
        function.owner_class = owner;
        function.implementing_class = owner;
        function.declaring_class = owner;

        for (i, argument) in descriptor.arguments.iter().enumerate() {
            let meta_type = self.resolve_type_use(
                scope,
                &descriptor.name,
                TypePosition::Argument(i + 1),
                &argument.type_use,
            )?;
            function.arguments.push(MetaArgument {
                meta_type,
                default_expression: argument.default_expression.clone(),
            });
        }

        if let Some(return_type) = &descriptor.return_type {
            function.return_type = Some(self.resolve_type_use(
                scope,
                &descriptor.name,
                TypePosition::Return,
                return_type,
            )?);
        }

        Ok(function)
    }

    /// Resolve one textual type use against the registry.
    fn resolve_type_use(
        &self,
        scope: &Scope,
        function: &str,
        position: TypePosition,
        type_use: &TypeUse,
    ) -> Result<MetaType, MergeError> {
        if type_use.is_varargs {
            return Ok(MetaType {
                type_ref: self.registry.varargs_ref(),
                name: VARARGS_TYPE_NAME.to_string(),
                indirections: 0,
                is_reference: false,
                is_constant: false,
                is_varargs: true,
            });
        }

        let entry = self.registry.find(&type_use.base_name).ok_or_else(|| {
            MergeError::UnknownType {
                scope: scope.to_string(),
                function: function.to_string(),
                position,
                type_name: type_use.base_name.clone(),
            }
        })?;

        Ok(MetaType {
            type_ref: entry.type_ref(),
            name: entry.name().to_string(),
            indirections: type_use.indirections,
            is_reference: type_use.is_reference,
            is_constant: type_use.is_constant,
            is_varargs: false,
        })
    }
}

/// Step 1 alone: discovered functions copied verbatim. Also the fallback
/// content for a failed scope.
fn discovered_only(owner: Option<ScopeId>, discovered: &[DiscoveredFunction]) -> Vec<MetaFunction> {
    discovered.iter().map(|f| f.to_meta_function(owner)).collect()
}

/// Apply one directive to its located target. Exhaustive over the directive
/// kinds: a new kind will not compile until it is handled here.
fn apply_directive(
    scope: &Scope,
    function: &mut MetaFunction,
    directive: &Directive,
) -> Result<(), MergeError> {
    match directive {
        Directive::CodeInjection(snip) => {
            function.injected_code.push(snip.clone());
        }
        Directive::ReplaceDefaultExpression { index, expression } => {
            let count = function.arguments.len();
            if *index == 0 || *index > count {
                return Err(MergeError::ArgumentIndexOutOfRange {
                    scope: scope.to_string(),
                    function: function.name.clone(),
                    index: *index,
                    count,
                });
            }
            function.arguments[*index - 1].default_expression = Some(expression.clone());
        }
        Directive::AccessOverride(visibility) => {
            function.visibility = *visibility;
        }
        Directive::StaticOverride(is_static) => {
            function.traits.is_static = *is_static;
        }
    }
    Ok(())
}
