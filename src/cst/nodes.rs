//! CST node definitions
//!
//! Every node is a plain value: built once by a grammar rule, owned by its
//! parent, never mutated afterwards. Serialization produces the tagged JSON
//! shape consumed by downstream tools: a `"type"` discriminant in
//! SCREAMING_SNAKE_CASE, camelCase fields, absent optionals omitted.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "IDENTIFIER")]
pub struct Identifier {
    pub value: String,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Dotted name such as `java.lang.Override`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "QUALIFIED_NAME")]
pub struct QualifiedName {
    pub name: Vec<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "IDENTIFIER_LIST")]
pub struct IdentifierList {
    pub list: Vec<Identifier>,
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "PRIMITIVE_TYPE")]
pub struct PrimitiveType {
    pub value: PrimitiveKind,
}

/// One segment of a reference type, with its type arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "CLASS_OR_INTERFACE_TYPE_ELEMENT", rename_all = "camelCase")]
pub struct ClassOrInterfaceTypeElement {
    pub name: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<TypeArguments>,
}

/// Dotted reference type such as `Map.Entry<K, V>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "CLASS_OR_INTERFACE_TYPE")]
pub struct ClassOrInterfaceType {
    pub list: Vec<ClassOrInterfaceTypeElement>,
}

/// A type carrying annotations or array dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "TYPE_TYPE")]
pub struct AnnotatedType {
    pub modifiers: Vec<Modifier>,
    pub value: Box<TypeType>,
    pub dimensions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypeType {
    Primitive(PrimitiveType),
    Identifier(Identifier),
    Element(ClassOrInterfaceTypeElement),
    Qualified(ClassOrInterfaceType),
    Annotated(AnnotatedType),
}

impl TypeType {
    pub fn primitive(value: PrimitiveKind) -> Self {
        TypeType::Primitive(PrimitiveType { value })
    }

    /// Primitive type, possibly annotated, without array dimensions
    pub fn is_primitive(&self) -> bool {
        match self {
            TypeType::Primitive(_) => true,
            TypeType::Annotated(annotated) => annotated.dimensions == 0 && annotated.value.is_primitive(),
            _ => false,
        }
    }

    /// Wrap `base` only when annotations or dimensions apply to it
    pub fn annotated(modifiers: Vec<Modifier>, base: TypeType, dimensions: usize) -> Self {
        if modifiers.is_empty() && dimensions == 0 {
            base
        } else {
            TypeType::Annotated(AnnotatedType {
                modifiers,
                value: Box::new(base),
                dimensions,
            })
        }
    }

    /// Build a reference type from its dotted segments
    pub fn from_elements(mut elements: Vec<ClassOrInterfaceTypeElement>) -> Self {
        if elements.len() == 1 {
            if let Some(element) = elements.pop() {
                return match element.type_arguments {
                    None => TypeType::Identifier(element.name),
                    Some(_) => TypeType::Element(element),
                };
            }
        }
        TypeType::Qualified(ClassOrInterfaceType { list: elements })
    }
}

/// `<A, ? extends B>`; an empty list is the diamond `<>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "TYPE_ARGUMENTS")]
pub struct TypeArguments {
    pub list: Vec<TypeArgument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypeArgument {
    Type(TypeType),
    Wildcard(Wildcard),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "WILDCARD")]
pub struct Wildcard {
    pub modifiers: Vec<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<WildcardBound>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WildcardBound {
    Extends(TypeType),
    Super(TypeType),
}

/// `extends A & B` bound of a type parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "TYPE_BOUND")]
pub struct TypeBound {
    pub list: Vec<TypeType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "TYPE_PARAMETER", rename_all = "camelCase")]
pub struct TypeParameter {
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_bound: Option<TypeBound>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "TYPE_PARAMETERS")]
pub struct TypeParameters {
    pub list: Vec<TypeParameter>,
}

// ---------------------------------------------------------------------------
// Modifiers and annotations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKeyword {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Default,
}

impl ModifierKeyword {
    pub fn keyword(&self) -> &'static str {
        match self {
            ModifierKeyword::Public => "public",
            ModifierKeyword::Protected => "protected",
            ModifierKeyword::Private => "private",
            ModifierKeyword::Static => "static",
            ModifierKeyword::Abstract => "abstract",
            ModifierKeyword::Final => "final",
            ModifierKeyword::Native => "native",
            ModifierKeyword::Synchronized => "synchronized",
            ModifierKeyword::Transient => "transient",
            ModifierKeyword::Volatile => "volatile",
            ModifierKeyword::Strictfp => "strictfp",
            ModifierKeyword::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "MODIFIER")]
pub struct KeywordModifier {
    pub value: ModifierKeyword,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "ANNOTATION", rename_all = "camelCase")]
pub struct Annotation {
    pub name: QualifiedName,
    /// Set whenever the annotation is followed by parentheses, even empty ones
    pub has_braces: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AnnotationValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Modifier {
    Annotation(Annotation),
    Keyword(KeywordModifier),
}

impl Modifier {
    pub fn keyword(value: ModifierKeyword) -> Self {
        Modifier::Keyword(KeywordModifier { value })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Pairs(ElementValuePairs),
    Single(ElementValue),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "ELEMENT_VALUE_PAIRS")]
pub struct ElementValuePairs {
    pub list: Vec<ElementValuePair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "ELEMENT_VALUE_PAIR")]
pub struct ElementValuePair {
    pub key: Identifier,
    pub value: ElementValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ElementValue {
    Annotation(Box<Annotation>),
    Array(ElementValueArrayInitializer),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "ELEMENT_VALUE_ARRAY_INITIALIZER")]
pub struct ElementValueArrayInitializer {
    pub list: Vec<ElementValue>,
}

// ---------------------------------------------------------------------------
// Variables and parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "VARIABLE_DECLARATOR_ID")]
pub struct VariableDeclaratorId {
    pub id: Identifier,
    /// Number of `[]` pairs after the name
    pub dimensions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "VARIABLE_DECLARATOR")]
pub struct VariableDeclarator {
    pub id: VariableDeclaratorId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<VariableInitializer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VariableInitializer {
    Array(ArrayInitializer),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "ARRAY_INITIALIZER")]
pub struct ArrayInitializer {
    pub list: Vec<VariableInitializer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "VARIABLE_DECLARATORS")]
pub struct VariableDeclarators {
    pub list: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "LOCAL_VARIABLE_DECLARATION", rename_all = "camelCase")]
pub struct LocalVariableDeclaration {
    pub modifiers: Vec<Modifier>,
    pub type_type: TypeType,
    pub declarators: VariableDeclarators,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "FORMAL_PARAMETER", rename_all = "camelCase")]
pub struct FormalParameter {
    pub modifiers: Vec<Modifier>,
    pub type_type: TypeType,
    pub dot_dot_dot: bool,
    pub id: VariableDeclaratorId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "IDENTIFIERS")]
pub struct LambdaIdentifiers {
    /// `None` for the empty parameter list `()`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<IdentifierList>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "FORMAL_PARAMETERS")]
pub struct FormalParameters {
    pub parameters: Vec<FormalParameter>,
}

/// Lambda parameters are either all bare names or all typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LambdaParameters {
    Identifiers(LambdaIdentifiers),
    Formal(FormalParameters),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LambdaBody {
    Block(Block),
    Expression(Box<Expression>),
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "EXPRESSION_LIST")]
pub struct ExpressionList {
    pub list: Vec<Expression>,
}

/// `name(args)` with any trailing `[index]` accesses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInvocation {
    pub name: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ExpressionList>,
    pub dimensions: Vec<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
    #[serde(rename = "%=")]
    ModAssign,
    #[serde(rename = "&=")]
    AndAssign,
    #[serde(rename = "|=")]
    OrAssign,
    #[serde(rename = "^=")]
    XorAssign,
    #[serde(rename = "<<=")]
    LShiftAssign,
    #[serde(rename = ">>=")]
    RShiftAssign,
    #[serde(rename = ">>>=")]
    URShiftAssign,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<<")]
    LShift,
    #[serde(rename = ">>")]
    RShift,
    #[serde(rename = ">>>")]
    URShift,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Mod,
}

/// Binding strength of `instanceof`, shared with the relational operators
pub const INSTANCEOF_PRECEDENCE: u8 = 9;

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Assign => "=",
            BinaryOperator::AddAssign => "+=",
            BinaryOperator::SubAssign => "-=",
            BinaryOperator::MulAssign => "*=",
            BinaryOperator::DivAssign => "/=",
            BinaryOperator::ModAssign => "%=",
            BinaryOperator::AndAssign => "&=",
            BinaryOperator::OrAssign => "|=",
            BinaryOperator::XorAssign => "^=",
            BinaryOperator::LShiftAssign => "<<=",
            BinaryOperator::RShiftAssign => ">>=",
            BinaryOperator::URShiftAssign => ">>>=",
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Gt => ">",
            BinaryOperator::Le => "<=",
            BinaryOperator::Ge => ">=",
            BinaryOperator::LShift => "<<",
            BinaryOperator::RShift => ">>",
            BinaryOperator::URShift => ">>>",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
        }
    }

    /// Higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Assign
            | BinaryOperator::AddAssign
            | BinaryOperator::SubAssign
            | BinaryOperator::MulAssign
            | BinaryOperator::DivAssign
            | BinaryOperator::ModAssign
            | BinaryOperator::AndAssign
            | BinaryOperator::OrAssign
            | BinaryOperator::XorAssign
            | BinaryOperator::LShiftAssign
            | BinaryOperator::RShiftAssign
            | BinaryOperator::URShiftAssign => 1,
            BinaryOperator::Or => 3,
            BinaryOperator::And => 4,
            BinaryOperator::BitOr => 5,
            BinaryOperator::BitXor => 6,
            BinaryOperator::BitAnd => 7,
            BinaryOperator::Eq | BinaryOperator::Ne => 8,
            BinaryOperator::Lt | BinaryOperator::Gt | BinaryOperator::Le | BinaryOperator::Ge => {
                INSTANCEOF_PRECEDENCE
            }
            BinaryOperator::LShift | BinaryOperator::RShift | BinaryOperator::URShift => 10,
            BinaryOperator::Add | BinaryOperator::Sub => 11,
            BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => 12,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        self.precedence() == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrefixOperator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "~")]
    Complement,
}

impl PrefixOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            PrefixOperator::Plus => "+",
            PrefixOperator::Minus => "-",
            PrefixOperator::Increment => "++",
            PrefixOperator::Decrement => "--",
            PrefixOperator::Not => "!",
            PrefixOperator::Complement => "~",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PostfixOperator {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

impl PostfixOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            PostfixOperator::Increment => "++",
            PostfixOperator::Decrement => "--",
        }
    }
}

/// One postfix step attached by a `QualifiedExpression`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Continuation {
    Identifier { value: String },
    MethodInvocation(MethodInvocation),
    This,
    Super,
    Class,
    Dimension { expression: Box<Expression> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum Expression {
    This,
    Super,
    NullLiteral,
    BooleanLiteral { value: String },
    DecimalLiteral { value: String },
    HexLiteral { value: String },
    OctLiteral { value: String },
    BinaryLiteral { value: String },
    FloatLiteral { value: String },
    CharLiteral { value: String },
    /// Source text with the quotes kept
    StringLiteral { value: String },
    Identifier { value: String },
    ParExpression {
        expression: Box<Expression>,
    },
    CastExpression {
        cast_type: TypeType,
        expression: Box<Expression>,
    },
    LambdaExpression {
        parameters: LambdaParameters,
        body: LambdaBody,
    },
    OperatorExpression {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    PrefixExpression {
        prefix: PrefixOperator,
        expression: Box<Expression>,
    },
    PostfixExpression {
        expression: Box<Expression>,
        postfix: PostfixOperator,
    },
    IfElseExpression {
        condition: Box<Expression>,
        #[serde(rename = "if")]
        then: Box<Expression>,
        #[serde(rename = "else")]
        otherwise: Box<Expression>,
    },
    InstanceofExpression {
        expression: Box<Expression>,
        type_type: TypeType,
    },
    QualifiedExpression {
        expression: Box<Expression>,
        rest: Continuation,
    },
    MethodInvocation(MethodInvocation),
    InstanceCreation {
        type_type: TypeType,
        #[serde(skip_serializing_if = "Option::is_none")]
        arguments: Option<ExpressionList>,
    },
    ArrayCreation {
        type_type: TypeType,
        dimensions: Vec<Expression>,
        extra_dimensions: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        initializer: Option<ArrayInitializer>,
    },
}

impl Expression {
    pub fn identifier(value: impl Into<String>) -> Self {
        Expression::Identifier { value: value.into() }
    }

    pub fn par(expression: Expression) -> Self {
        Expression::ParExpression { expression: Box::new(expression) }
    }

    pub fn operator(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::OperatorExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn if_else(condition: Expression, then: Expression, otherwise: Expression) -> Self {
        Expression::IfElseExpression {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn qualified(expression: Expression, rest: Continuation) -> Self {
        Expression::QualifiedExpression {
            expression: Box::new(expression),
            rest,
        }
    }

    /// Casts and lambdas absorb their own postfix chain
    pub fn accepts_continuation(&self) -> bool {
        !matches!(self, Expression::CastExpression { .. } | Expression::LambdaExpression { .. })
    }
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "BLOCK")]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "EMPTY_STATEMENT")]
pub struct EmptyStatement {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "LOCAL_VARIABLE_DECLARATION_STATEMENT")]
pub struct LocalVariableDeclarationStatement {
    pub declaration: LocalVariableDeclaration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "EXPRESSION_STATEMENT")]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "IF_STATEMENT")]
pub struct IfStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    #[serde(rename = "else", skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "WHILE_STATEMENT")]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "DO_STATEMENT")]
pub struct DoStatement {
    pub body: Box<Statement>,
    pub condition: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "FOR_STATEMENT")]
pub struct ForStatement {
    pub control: ForControl,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "RETURN_STATEMENT")]
pub struct ReturnStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "BREAK_STATEMENT")]
pub struct BreakStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "CONTINUE_STATEMENT")]
pub struct ContinueStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "THROW_STATEMENT")]
pub struct ThrowStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Block(Block),
    Empty(EmptyStatement),
    LocalVariableDeclaration(LocalVariableDeclarationStatement),
    Expression(ExpressionStatement),
    If(IfStatement),
    While(WhileStatement),
    Do(DoStatement),
    For(ForStatement),
    Return(ReturnStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Throw(ThrowStatement),
}

// ---------------------------------------------------------------------------
// For-loop control
// ---------------------------------------------------------------------------

/// Initializer slot of a basic `for` header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    LocalVariableDeclaration(LocalVariableDeclaration),
    ExpressionList(ExpressionList),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "BASIC_FOR_STATEMENT", rename_all = "camelCase")]
pub struct BasicForStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_init: Option<ForInit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_list: Option<ExpressionList>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "ENHANCED_FOR_STATEMENT")]
pub struct EnhancedForStatement {
    /// Always a single declarator without initializer
    pub declaration: LocalVariableDeclaration,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ForControl {
    Basic(BasicForStatement),
    Enhanced(EnhancedForStatement),
}
