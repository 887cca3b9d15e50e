//! Vocabulary constants
//!
//! Class and predicate IRIs emitted by the builders, grouped by ontology
//! module. All values are full IRIs.

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";
}

/// Expressions, patterns and source locations
pub mod core {
    pub const NS: &str = "https://w3id.org/codegraph/core#";

    // Generic fallbacks
    pub const EXPRESSION: &str = "https://w3id.org/codegraph/core#Expression";
    pub const PATTERN: &str = "https://w3id.org/codegraph/core#Pattern";

    // Literals
    pub const INTEGER_LITERAL: &str = "https://w3id.org/codegraph/core#IntegerLiteral";
    pub const FLOAT_LITERAL: &str = "https://w3id.org/codegraph/core#FloatLiteral";
    pub const STRING_LITERAL: &str = "https://w3id.org/codegraph/core#StringLiteral";
    pub const ATOM_LITERAL: &str = "https://w3id.org/codegraph/core#AtomLiteral";
    pub const BOOLEAN_LITERAL: &str = "https://w3id.org/codegraph/core#BooleanLiteral";
    pub const NIL_LITERAL: &str = "https://w3id.org/codegraph/core#NilLiteral";
    pub const CHARLIST_LITERAL: &str = "https://w3id.org/codegraph/core#CharlistLiteral";
    pub const BINARY_LITERAL: &str = "https://w3id.org/codegraph/core#BinaryLiteral";
    pub const LIST_LITERAL: &str = "https://w3id.org/codegraph/core#ListLiteral";
    pub const KEYWORD_LIST_LITERAL: &str = "https://w3id.org/codegraph/core#KeywordListLiteral";
    pub const TUPLE_LITERAL: &str = "https://w3id.org/codegraph/core#TupleLiteral";
    pub const MAP_LITERAL: &str = "https://w3id.org/codegraph/core#MapLiteral";
    pub const MAP_ENTRY: &str = "https://w3id.org/codegraph/core#MapEntry";
    pub const STRUCT_LITERAL: &str = "https://w3id.org/codegraph/core#StructLiteral";
    pub const RANGE_LITERAL: &str = "https://w3id.org/codegraph/core#RangeLiteral";
    pub const SIGIL_LITERAL: &str = "https://w3id.org/codegraph/core#SigilLiteral";

    // Operators
    pub const COMPARISON_OPERATOR: &str = "https://w3id.org/codegraph/core#ComparisonOperator";
    pub const LOGICAL_OPERATOR: &str = "https://w3id.org/codegraph/core#LogicalOperator";
    pub const ARITHMETIC_OPERATOR: &str = "https://w3id.org/codegraph/core#ArithmeticOperator";
    pub const STRING_CONCAT_OPERATOR: &str =
        "https://w3id.org/codegraph/core#StringConcatOperator";
    pub const LIST_OPERATOR: &str = "https://w3id.org/codegraph/core#ListOperator";
    pub const PIPE_OPERATOR: &str = "https://w3id.org/codegraph/core#PipeOperator";
    pub const MATCH_OPERATOR: &str = "https://w3id.org/codegraph/core#MatchOperator";
    pub const IN_OPERATOR: &str = "https://w3id.org/codegraph/core#InOperator";
    pub const CAPTURE_OPERATOR: &str = "https://w3id.org/codegraph/core#CaptureOperator";

    // References, calls, control flow
    pub const VARIABLE: &str = "https://w3id.org/codegraph/core#Variable";
    pub const WILDCARD: &str = "https://w3id.org/codegraph/core#Wildcard";
    pub const LOCAL_CALL: &str = "https://w3id.org/codegraph/core#LocalCall";
    pub const REMOTE_CALL: &str = "https://w3id.org/codegraph/core#RemoteCall";
    pub const IF_EXPRESSION: &str = "https://w3id.org/codegraph/core#IfExpression";
    pub const UNLESS_EXPRESSION: &str = "https://w3id.org/codegraph/core#UnlessExpression";
    pub const BLOCK: &str = "https://w3id.org/codegraph/core#Block";

    // Patterns
    pub const LITERAL_PATTERN: &str = "https://w3id.org/codegraph/core#LiteralPattern";
    pub const VARIABLE_PATTERN: &str = "https://w3id.org/codegraph/core#VariablePattern";
    pub const WILDCARD_PATTERN: &str = "https://w3id.org/codegraph/core#WildcardPattern";
    pub const PIN_PATTERN: &str = "https://w3id.org/codegraph/core#PinPattern";
    pub const TUPLE_PATTERN: &str = "https://w3id.org/codegraph/core#TuplePattern";
    pub const LIST_PATTERN: &str = "https://w3id.org/codegraph/core#ListPattern";
    pub const MAP_PATTERN: &str = "https://w3id.org/codegraph/core#MapPattern";
    pub const STRUCT_PATTERN: &str = "https://w3id.org/codegraph/core#StructPattern";
    pub const BINARY_PATTERN: &str = "https://w3id.org/codegraph/core#BinaryPattern";
    pub const AS_PATTERN: &str = "https://w3id.org/codegraph/core#AsPattern";

    // Source locations
    pub const SOURCE_LOCATION: &str = "https://w3id.org/codegraph/core#SourceLocation";

    // Value predicates
    pub const INTEGER_VALUE: &str = "https://w3id.org/codegraph/core#integerValue";
    pub const FLOAT_VALUE: &str = "https://w3id.org/codegraph/core#floatValue";
    pub const STRING_VALUE: &str = "https://w3id.org/codegraph/core#stringValue";
    pub const ATOM_VALUE: &str = "https://w3id.org/codegraph/core#atomValue";
    pub const BOOLEAN_VALUE: &str = "https://w3id.org/codegraph/core#booleanValue";
    pub const CHARLIST_VALUE: &str = "https://w3id.org/codegraph/core#charlistValue";
    pub const BINARY_VALUE: &str = "https://w3id.org/codegraph/core#binaryValue";

    // Structural predicates
    pub const HAS_ELEMENT: &str = "https://w3id.org/codegraph/core#hasElement";
    pub const HAS_TAIL: &str = "https://w3id.org/codegraph/core#hasTail";
    pub const ELEMENT_COUNT: &str = "https://w3id.org/codegraph/core#elementCount";
    pub const HAS_ENTRY: &str = "https://w3id.org/codegraph/core#hasEntry";
    pub const HAS_KEY: &str = "https://w3id.org/codegraph/core#hasKey";
    pub const HAS_VALUE: &str = "https://w3id.org/codegraph/core#hasValue";
    pub const HAS_SEGMENT: &str = "https://w3id.org/codegraph/core#hasSegment";
    pub const STRUCT_MODULE_NAME: &str = "https://w3id.org/codegraph/core#structModuleName";
    pub const REFERS_TO_MODULE: &str = "https://w3id.org/codegraph/core#refersToModule";
    pub const RANGE_START: &str = "https://w3id.org/codegraph/core#rangeStart";
    pub const RANGE_END: &str = "https://w3id.org/codegraph/core#rangeEnd";
    pub const RANGE_STEP: &str = "https://w3id.org/codegraph/core#rangeStep";
    pub const SIGIL_CHAR: &str = "https://w3id.org/codegraph/core#sigilChar";
    pub const SIGIL_CONTENT: &str = "https://w3id.org/codegraph/core#sigilContent";
    pub const SIGIL_MODIFIERS: &str = "https://w3id.org/codegraph/core#sigilModifiers";
    pub const OPERATOR_SYMBOL: &str = "https://w3id.org/codegraph/core#operatorSymbol";
    pub const HAS_LEFT_OPERAND: &str = "https://w3id.org/codegraph/core#hasLeftOperand";
    pub const HAS_RIGHT_OPERAND: &str = "https://w3id.org/codegraph/core#hasRightOperand";
    pub const HAS_OPERAND: &str = "https://w3id.org/codegraph/core#hasOperand";
    pub const CAPTURE_INDEX: &str = "https://w3id.org/codegraph/core#captureIndex";
    pub const CAPTURE_MODULE_NAME: &str = "https://w3id.org/codegraph/core#captureModuleName";
    pub const CAPTURE_FUNCTION_NAME: &str =
        "https://w3id.org/codegraph/core#captureFunctionName";
    pub const CAPTURE_ARITY: &str = "https://w3id.org/codegraph/core#captureArity";
    pub const NAME: &str = "https://w3id.org/codegraph/core#name";
    pub const FUNCTION_NAME: &str = "https://w3id.org/codegraph/core#functionName";
    pub const MODULE_NAME: &str = "https://w3id.org/codegraph/core#moduleName";
    pub const ARITY: &str = "https://w3id.org/codegraph/core#arity";
    pub const HAS_ARGUMENT: &str = "https://w3id.org/codegraph/core#hasArgument";
    pub const HAS_RECEIVER: &str = "https://w3id.org/codegraph/core#hasReceiver";
    pub const HAS_CONDITION: &str = "https://w3id.org/codegraph/core#hasCondition";
    pub const HAS_THEN_BRANCH: &str = "https://w3id.org/codegraph/core#hasThenBranch";
    pub const HAS_ELSE_BRANCH: &str = "https://w3id.org/codegraph/core#hasElseBranch";
    pub const HAS_STATEMENT: &str = "https://w3id.org/codegraph/core#hasStatement";
    pub const FORM_NAME: &str = "https://w3id.org/codegraph/core#formName";

    // Location predicates
    pub const HAS_SOURCE_LOCATION: &str = "https://w3id.org/codegraph/core#hasSourceLocation";
    pub const START_LINE: &str = "https://w3id.org/codegraph/core#startLine";
    pub const END_LINE: &str = "https://w3id.org/codegraph/core#endLine";
    pub const IN_SOURCE_FILE: &str = "https://w3id.org/codegraph/core#inSourceFile";
}

/// Modules, functions, types, structs, protocols, behaviours
pub mod structure {
    pub const NS: &str = "https://w3id.org/codegraph/structure#";

    pub const MODULE: &str = "https://w3id.org/codegraph/structure#Module";
    pub const NESTED_MODULE: &str = "https://w3id.org/codegraph/structure#NestedModule";
    pub const ALIAS_DIRECTIVE: &str = "https://w3id.org/codegraph/structure#AliasDirective";
    pub const IMPORT_DIRECTIVE: &str = "https://w3id.org/codegraph/structure#ImportDirective";
    pub const REQUIRE_DIRECTIVE: &str = "https://w3id.org/codegraph/structure#RequireDirective";
    pub const USE_DIRECTIVE: &str = "https://w3id.org/codegraph/structure#UseDirective";
    pub const PUBLIC_FUNCTION: &str = "https://w3id.org/codegraph/structure#PublicFunction";
    pub const PRIVATE_FUNCTION: &str = "https://w3id.org/codegraph/structure#PrivateFunction";
    pub const PUBLIC_MACRO: &str = "https://w3id.org/codegraph/structure#PublicMacro";
    pub const PRIVATE_MACRO: &str = "https://w3id.org/codegraph/structure#PrivateMacro";
    pub const FUNCTION_CLAUSE: &str = "https://w3id.org/codegraph/structure#FunctionClause";
    pub const PARAMETER: &str = "https://w3id.org/codegraph/structure#Parameter";
    pub const FUNCTION_SPEC: &str = "https://w3id.org/codegraph/structure#FunctionSpec";
    pub const CALLBACK_SPEC: &str = "https://w3id.org/codegraph/structure#CallbackSpec";
    pub const MACRO_CALLBACK_SPEC: &str = "https://w3id.org/codegraph/structure#MacroCallbackSpec";

    pub const PUBLIC_TYPE: &str = "https://w3id.org/codegraph/structure#PublicType";
    pub const PRIVATE_TYPE: &str = "https://w3id.org/codegraph/structure#PrivateType";
    pub const OPAQUE_TYPE: &str = "https://w3id.org/codegraph/structure#OpaqueType";
    pub const TYPE_VARIABLE: &str = "https://w3id.org/codegraph/structure#TypeVariable";
    pub const UNION_TYPE: &str = "https://w3id.org/codegraph/structure#UnionType";
    pub const TUPLE_TYPE: &str = "https://w3id.org/codegraph/structure#TupleType";
    pub const FUNCTION_TYPE: &str = "https://w3id.org/codegraph/structure#FunctionType";
    pub const PARAMETERIZED_TYPE: &str = "https://w3id.org/codegraph/structure#ParameterizedType";
    pub const REMOTE_TYPE: &str = "https://w3id.org/codegraph/structure#RemoteType";
    pub const BASIC_TYPE: &str = "https://w3id.org/codegraph/structure#BasicType";
    pub const LITERAL_TYPE: &str = "https://w3id.org/codegraph/structure#LiteralType";
    pub const MAP_TYPE: &str = "https://w3id.org/codegraph/structure#MapType";
    pub const TYPE_EXPRESSION: &str = "https://w3id.org/codegraph/structure#TypeExpression";

    pub const STRUCT: &str = "https://w3id.org/codegraph/structure#Struct";
    pub const EXCEPTION: &str = "https://w3id.org/codegraph/structure#Exception";
    pub const STRUCT_FIELD: &str = "https://w3id.org/codegraph/structure#StructField";
    pub const PROTOCOL: &str = "https://w3id.org/codegraph/structure#Protocol";
    pub const PROTOCOL_FUNCTION: &str = "https://w3id.org/codegraph/structure#ProtocolFunction";
    pub const PROTOCOL_IMPLEMENTATION: &str =
        "https://w3id.org/codegraph/structure#ProtocolImplementation";
    pub const BEHAVIOUR: &str = "https://w3id.org/codegraph/structure#Behaviour";

    // Module predicates
    pub const MODULE_NAME: &str = "https://w3id.org/codegraph/structure#moduleName";
    pub const DOCSTRING: &str = "https://w3id.org/codegraph/structure#docstring";
    pub const PARENT_MODULE: &str = "https://w3id.org/codegraph/structure#parentModule";
    pub const HAS_NESTED_MODULE: &str = "https://w3id.org/codegraph/structure#hasNestedModule";
    pub const ALIASES_MODULE: &str = "https://w3id.org/codegraph/structure#aliasesModule";
    pub const IMPORTS_MODULE: &str = "https://w3id.org/codegraph/structure#importsModule";
    pub const REQUIRES_MODULE: &str = "https://w3id.org/codegraph/structure#requiresModule";
    pub const USES_MODULE: &str = "https://w3id.org/codegraph/structure#usesModule";
    pub const HAS_DIRECTIVE: &str = "https://w3id.org/codegraph/structure#hasDirective";
    pub const DIRECTIVE_TARGET: &str = "https://w3id.org/codegraph/structure#directiveTarget";
    pub const ALIAS_NAME: &str = "https://w3id.org/codegraph/structure#aliasName";
    pub const USE_OPTION_COUNT: &str = "https://w3id.org/codegraph/structure#useOptionCount";
    pub const CONTAINS_FUNCTION: &str = "https://w3id.org/codegraph/structure#containsFunction";
    pub const CONTAINS_MACRO: &str = "https://w3id.org/codegraph/structure#containsMacro";
    pub const CONTAINS_TYPE: &str = "https://w3id.org/codegraph/structure#containsType";

    // Function predicates
    pub const FUNCTION_NAME: &str = "https://w3id.org/codegraph/structure#functionName";
    pub const ARITY: &str = "https://w3id.org/codegraph/structure#arity";
    pub const MIN_ARITY: &str = "https://w3id.org/codegraph/structure#minArity";
    pub const BELONGS_TO: &str = "https://w3id.org/codegraph/structure#belongsTo";
    pub const HAS_CLAUSE: &str = "https://w3id.org/codegraph/structure#hasClause";
    pub const CLAUSE_ORDER: &str = "https://w3id.org/codegraph/structure#clauseOrder";
    pub const HAS_PARAMETER: &str = "https://w3id.org/codegraph/structure#hasParameter";
    pub const PARAMETER_POSITION: &str = "https://w3id.org/codegraph/structure#parameterPosition";
    pub const HAS_PATTERN: &str = "https://w3id.org/codegraph/structure#hasPattern";
    pub const HAS_GUARD: &str = "https://w3id.org/codegraph/structure#hasGuard";
    pub const HAS_BODY: &str = "https://w3id.org/codegraph/structure#hasBody";
    pub const HAS_SPEC: &str = "https://w3id.org/codegraph/structure#hasSpec";
    pub const HAS_PARAMETER_TYPE: &str = "https://w3id.org/codegraph/structure#hasParameterType";
    pub const HAS_RETURN_TYPE: &str = "https://w3id.org/codegraph/structure#hasReturnType";

    // Type predicates
    pub const TYPE_NAME: &str = "https://w3id.org/codegraph/structure#typeName";
    pub const HAS_TYPE_PARAMETER: &str = "https://w3id.org/codegraph/structure#hasTypeParameter";
    pub const HAS_TYPE_EXPRESSION: &str =
        "https://w3id.org/codegraph/structure#hasTypeExpression";
    pub const HAS_UNION_MEMBER: &str = "https://w3id.org/codegraph/structure#hasUnionMember";
    pub const HAS_ELEMENT_TYPE: &str = "https://w3id.org/codegraph/structure#hasElementType";
    pub const BASE_TYPE_NAME: &str = "https://w3id.org/codegraph/structure#baseTypeName";
    pub const HAS_TYPE_ARGUMENT: &str = "https://w3id.org/codegraph/structure#hasTypeArgument";
    pub const TYPE_MODULE_NAME: &str = "https://w3id.org/codegraph/structure#typeModuleName";
    pub const LITERAL_TYPE_VALUE: &str = "https://w3id.org/codegraph/structure#literalTypeValue";
    pub const HAS_FIELD_TYPE: &str = "https://w3id.org/codegraph/structure#hasFieldType";
    pub const HAS_KEY_TYPE: &str = "https://w3id.org/codegraph/structure#hasKeyType";
    pub const IS_REQUIRED_KEY: &str = "https://w3id.org/codegraph/structure#isRequiredKey";

    // Struct predicates
    pub const HAS_STRUCT: &str = "https://w3id.org/codegraph/structure#hasStruct";
    pub const HAS_FIELD: &str = "https://w3id.org/codegraph/structure#hasField";
    pub const FIELD_NAME: &str = "https://w3id.org/codegraph/structure#fieldName";
    pub const IS_ENFORCED: &str = "https://w3id.org/codegraph/structure#isEnforced";
    pub const HAS_DEFAULT_VALUE: &str = "https://w3id.org/codegraph/structure#hasDefaultValue";
    pub const DERIVES_PROTOCOL: &str = "https://w3id.org/codegraph/structure#derivesProtocol";

    // Protocol predicates
    pub const DEFINES_PROTOCOL_FUNCTION: &str =
        "https://w3id.org/codegraph/structure#definesProtocolFunction";
    pub const FALLBACK_TO_ANY: &str = "https://w3id.org/codegraph/structure#fallbackToAny";
    pub const IMPLEMENTS_PROTOCOL: &str = "https://w3id.org/codegraph/structure#implementsProtocol";
    pub const FOR_DATA_TYPE: &str = "https://w3id.org/codegraph/structure#forDataType";
    pub const HAS_IMPLEMENTATION: &str = "https://w3id.org/codegraph/structure#hasImplementation";

    // Behaviour predicates
    pub const DEFINES_CALLBACK: &str = "https://w3id.org/codegraph/structure#definesCallback";
    pub const IS_OPTIONAL_CALLBACK: &str =
        "https://w3id.org/codegraph/structure#isOptionalCallback";
    pub const IMPLEMENTS_BEHAVIOUR: &str =
        "https://w3id.org/codegraph/structure#implementsBehaviour";
}

/// Process-pattern implementations
pub mod otp {
    pub const NS: &str = "https://w3id.org/codegraph/otp#";

    pub const GEN_SERVER_IMPLEMENTATION: &str =
        "https://w3id.org/codegraph/otp#GenServerImplementation";
    pub const SUPERVISOR_IMPLEMENTATION: &str =
        "https://w3id.org/codegraph/otp#SupervisorImplementation";
    pub const DYNAMIC_SUPERVISOR_IMPLEMENTATION: &str =
        "https://w3id.org/codegraph/otp#DynamicSupervisorImplementation";
    pub const AGENT_IMPLEMENTATION: &str = "https://w3id.org/codegraph/otp#AgentImplementation";
    pub const TASK_IMPLEMENTATION: &str = "https://w3id.org/codegraph/otp#TaskImplementation";
    pub const SUPERVISION_STRATEGY: &str = "https://w3id.org/codegraph/otp#SupervisionStrategy";
    pub const CHILD_SPEC: &str = "https://w3id.org/codegraph/otp#ChildSpec";
    pub const CALLBACK_IMPLEMENTATION: &str =
        "https://w3id.org/codegraph/otp#CallbackImplementation";

    pub const IMPLEMENTS_CALLBACK: &str = "https://w3id.org/codegraph/otp#implementsCallback";
    pub const CALLBACK_NAME: &str = "https://w3id.org/codegraph/otp#callbackName";
    pub const HAS_STRATEGY: &str = "https://w3id.org/codegraph/otp#hasStrategy";
    pub const STRATEGY_TYPE: &str = "https://w3id.org/codegraph/otp#strategyType";
    pub const MAX_RESTARTS: &str = "https://w3id.org/codegraph/otp#maxRestarts";
    pub const MAX_SECONDS: &str = "https://w3id.org/codegraph/otp#maxSeconds";
    pub const HAS_CHILD_SPEC: &str = "https://w3id.org/codegraph/otp#hasChildSpec";
    pub const CHILD_ID: &str = "https://w3id.org/codegraph/otp#childId";
    pub const CHILD_ORDER: &str = "https://w3id.org/codegraph/otp#childOrder";
    pub const START_MODULE: &str = "https://w3id.org/codegraph/otp#startModule";
    pub const RESTART_STRATEGY: &str = "https://w3id.org/codegraph/otp#restartStrategy";
    pub const TASK_KIND: &str = "https://w3id.org/codegraph/otp#taskKind";
    pub const USE_OPTION_COUNT: &str = "https://w3id.org/codegraph/otp#useOptionCount";
}
