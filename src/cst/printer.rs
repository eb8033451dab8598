//! Source reconstruction for CST nodes
//!
//! Inline constructs (expressions, types, modifiers) print through
//! `Display`; statements and blocks go through [`CstPrinter`] so nested
//! bodies are indented. Printed text re-parses to an equal tree.

use std::fmt::{self, Display, Formatter};

use super::nodes::*;

/// Writes `items` separated by `separator`
struct Separated<'a, T>(&'a [T], &'static str);

impl<T: Display> Display for Separated<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(self.1)?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Modifiers each followed by a space, ready to prefix a type
struct ModifierPrefix<'a>(&'a [Modifier]);

impl Display for ModifierPrefix<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for modifier in self.0 {
            write!(f, "{} ", modifier)?;
        }
        Ok(())
    }
}

/// Statement printer
pub struct CstPrinter {
    indent_level: usize,
    output: String,
}

impl Default for CstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl CstPrinter {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            output: String::new(),
        }
    }

    pub fn print_statement(&mut self, statement: &Statement) -> String {
        self.output.clear();
        self.statement(statement);
        self.output.clone()
    }

    pub fn print_block(&mut self, block: &Block) -> String {
        self.output.clear();
        self.block(block);
        self.output.clone()
    }

    fn indent(&mut self) {
        self.indent_level += 2;
    }

    fn dedent(&mut self) {
        if self.indent_level >= 2 {
            self.indent_level -= 2;
        }
    }

    fn newline(&mut self) {
        self.output.push('\n');
        for _ in 0..self.indent_level {
            self.output.push(' ');
        }
    }

    fn push(&mut self, text: impl Display) {
        self.output.push_str(&text.to_string());
    }

    fn block(&mut self, block: &Block) {
        if block.statements.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push('{');
        self.indent();
        for statement in &block.statements {
            self.newline();
            self.statement(statement);
        }
        self.dedent();
        self.newline();
        self.output.push('}');
    }

    /// Loop and branch bodies: blocks stay on the header line
    fn body(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => {
                self.output.push(' ');
                self.block(block);
            }
            other => {
                self.indent();
                self.newline();
                self.statement(other);
                self.dedent();
            }
        }
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => self.block(block),
            Statement::Empty(_) => self.output.push(';'),
            Statement::LocalVariableDeclaration(s) => self.push(format_args!("{};", s.declaration)),
            Statement::Expression(s) => self.push(format_args!("{};", s.expression)),
            Statement::If(s) => {
                self.push(format_args!("if ({})", s.condition));
                self.body(&s.body);
                if let Some(otherwise) = &s.otherwise {
                    if matches!(*s.body, Statement::Block(_)) {
                        self.output.push_str(" else");
                    } else {
                        self.newline();
                        self.output.push_str("else");
                    }
                    match otherwise.as_ref() {
                        Statement::If(_) => {
                            self.output.push(' ');
                            self.statement(otherwise);
                        }
                        other => self.body(other),
                    }
                }
            }
            Statement::While(s) => {
                self.push(format_args!("while ({})", s.condition));
                self.body(&s.body);
            }
            Statement::Do(s) => {
                self.output.push_str("do");
                self.body(&s.body);
                if matches!(*s.body, Statement::Block(_)) {
                    self.output.push(' ');
                } else {
                    self.newline();
                }
                self.push(format_args!("while ({});", s.condition));
            }
            Statement::For(s) => {
                self.push(format_args!("for ({})", s.control));
                self.body(&s.body);
            }
            Statement::Return(s) => match &s.expression {
                Some(expression) => self.push(format_args!("return {};", expression)),
                None => self.output.push_str("return;"),
            },
            Statement::Break(s) => match &s.label {
                Some(label) => self.push(format_args!("break {};", label)),
                None => self.output.push_str("break;"),
            },
            Statement::Continue(s) => match &s.label {
                Some(label) => self.push(format_args!("continue {};", label)),
                None => self.output.push_str("continue;"),
            },
            Statement::Throw(s) => self.push(format_args!("throw {};", s.expression)),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&CstPrinter::new().print_statement(self))
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&CstPrinter::new().print_block(self))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Separated(&self.name, "."))
    }
}

impl Display for IdentifierList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Separated(&self.list, ", "))
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.keyword())
    }
}

impl Display for ClassOrInterfaceTypeElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(arguments) = &self.type_arguments {
            write!(f, "{}", arguments)?;
        }
        Ok(())
    }
}

impl Display for ClassOrInterfaceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Separated(&self.list, "."))
    }
}

impl Display for AnnotatedType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ModifierPrefix(&self.modifiers), self.value)?;
        for _ in 0..self.dimensions {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl Display for TypeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeType::Primitive(t) => write!(f, "{}", t),
            TypeType::Identifier(t) => write!(f, "{}", t),
            TypeType::Element(t) => write!(f, "{}", t),
            TypeType::Qualified(t) => write!(f, "{}", t),
            TypeType::Annotated(t) => write!(f, "{}", t),
        }
    }
}

impl Display for TypeArguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", Separated(&self.list, ", "))
    }
}

impl Display for TypeArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeArgument::Type(t) => write!(f, "{}", t),
            TypeArgument::Wildcard(w) => write!(f, "{}", w),
        }
    }
}

impl Display for Wildcard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}?", ModifierPrefix(&self.modifiers))?;
        match &self.bound {
            Some(WildcardBound::Extends(t)) => write!(f, " extends {}", t),
            Some(WildcardBound::Super(t)) => write!(f, " super {}", t),
            None => Ok(()),
        }
    }
}

impl Display for TypeBound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Separated(&self.list, " & "))
    }
}

impl Display for TypeParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ModifierPrefix(&self.modifiers), self.name)?;
        if let Some(bound) = &self.type_bound {
            write!(f, " extends {}", bound)?;
        }
        Ok(())
    }
}

impl Display for TypeParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", Separated(&self.list, ", "))
    }
}

impl Display for KeywordModifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.keyword())
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if self.has_braces {
            f.write_str("(")?;
            if let Some(value) = &self.value {
                write!(f, "{}", value)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Annotation(a) => write!(f, "{}", a),
            Modifier::Keyword(k) => write!(f, "{}", k),
        }
    }
}

impl Display for AnnotationValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Pairs(pairs) => write!(f, "{}", Separated(&pairs.list, ", ")),
            AnnotationValue::Single(value) => write!(f, "{}", value),
        }
    }
}

impl Display for ElementValuePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

impl Display for ElementValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ElementValue::Annotation(a) => write!(f, "{}", a),
            ElementValue::Array(a) => write!(f, "{{{}}}", Separated(&a.list, ", ")),
            ElementValue::Expression(e) => write!(f, "{}", e),
        }
    }
}

impl Display for VariableDeclaratorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        for _ in 0..self.dimensions {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl Display for VariableDeclarator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(init) = &self.init {
            write!(f, " = {}", init)?;
        }
        Ok(())
    }
}

impl Display for VariableInitializer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VariableInitializer::Array(a) => write!(f, "{}", a),
            VariableInitializer::Expression(e) => write!(f, "{}", e),
        }
    }
}

impl Display for ArrayInitializer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", Separated(&self.list, ", "))
    }
}

impl Display for VariableDeclarators {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Separated(&self.list, ", "))
    }
}

impl Display for LocalVariableDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", ModifierPrefix(&self.modifiers), self.type_type, self.declarators)
    }
}

impl Display for FormalParameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ModifierPrefix(&self.modifiers), self.type_type)?;
        if self.dot_dot_dot {
            f.write_str("...")?;
        }
        write!(f, " {}", self.id)
    }
}

impl Display for LambdaParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LambdaParameters::Identifiers(ids) => match &ids.identifiers {
                Some(list) => write!(f, "({})", list),
                None => f.write_str("()"),
            },
            LambdaParameters::Formal(formal) => write!(f, "({})", Separated(&formal.parameters, ", ")),
        }
    }
}

impl Display for LambdaBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LambdaBody::Block(block) => write!(f, "{}", block),
            LambdaBody::Expression(expression) => write!(f, "{}", expression),
        }
    }
}

impl Display for ExpressionList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Separated(&self.list, ", "))
    }
}

impl Display for MethodInvocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if let Some(parameters) = &self.parameters {
            write!(f, "{}", parameters)?;
        }
        f.write_str(")")?;
        for index in &self.dimensions {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Display for Continuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Continuation::Identifier { value } => write!(f, ".{}", value),
            Continuation::MethodInvocation(invocation) => write!(f, ".{}", invocation),
            Continuation::This => f.write_str(".this"),
            Continuation::Super => f.write_str(".super"),
            Continuation::Class => f.write_str(".class"),
            Continuation::Dimension { expression } => write!(f, "[{}]", expression),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::This => f.write_str("this"),
            Expression::Super => f.write_str("super"),
            Expression::NullLiteral => f.write_str("null"),
            Expression::BooleanLiteral { value }
            | Expression::DecimalLiteral { value }
            | Expression::HexLiteral { value }
            | Expression::OctLiteral { value }
            | Expression::BinaryLiteral { value }
            | Expression::FloatLiteral { value }
            | Expression::CharLiteral { value }
            | Expression::StringLiteral { value }
            | Expression::Identifier { value } => f.write_str(value),
            Expression::ParExpression { expression } => write!(f, "({})", expression),
            Expression::CastExpression { cast_type, expression } => write!(f, "({}) {}", cast_type, expression),
            Expression::LambdaExpression { parameters, body } => write!(f, "{} -> {}", parameters, body),
            Expression::OperatorExpression { left, operator, right } => {
                write!(f, "{} {} {}", left, operator, right)
            }
            Expression::PrefixExpression { prefix, expression } => {
                let operand = expression.to_string();
                // `- -a` must not collapse into `--a`
                if operand.starts_with(['+', '-']) {
                    write!(f, "{} {}", prefix.symbol(), operand)
                } else {
                    write!(f, "{}{}", prefix.symbol(), operand)
                }
            }
            Expression::PostfixExpression { expression, postfix } => write!(f, "{}{}", expression, postfix.symbol()),
            Expression::IfElseExpression { condition, then, otherwise } => {
                write!(f, "{} ? {} : {}", condition, then, otherwise)
            }
            Expression::InstanceofExpression { expression, type_type } => {
                write!(f, "{} instanceof {}", expression, type_type)
            }
            Expression::QualifiedExpression { expression, rest } => write!(f, "{}{}", expression, rest),
            Expression::MethodInvocation(invocation) => write!(f, "{}", invocation),
            Expression::InstanceCreation { type_type, arguments } => {
                write!(f, "new {}(", type_type)?;
                if let Some(arguments) = arguments {
                    write!(f, "{}", arguments)?;
                }
                f.write_str(")")
            }
            Expression::ArrayCreation { type_type, dimensions, extra_dimensions, initializer } => {
                write!(f, "new {}", type_type)?;
                for dimension in dimensions {
                    write!(f, "[{}]", dimension)?;
                }
                for _ in 0..*extra_dimensions {
                    f.write_str("[]")?;
                }
                if let Some(initializer) = initializer {
                    write!(f, " {}", initializer)?;
                }
                Ok(())
            }
        }
    }
}

impl Display for ForInit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ForInit::LocalVariableDeclaration(d) => write!(f, "{}", d),
            ForInit::ExpressionList(l) => write!(f, "{}", l),
        }
    }
}

impl Display for BasicForStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(init) = &self.for_init {
            write!(f, "{}", init)?;
        }
        f.write_str(";")?;
        if let Some(expression) = &self.expression {
            write!(f, " {}", expression)?;
        }
        f.write_str(";")?;
        if let Some(list) = &self.expression_list {
            write!(f, " {}", list)?;
        }
        Ok(())
    }
}

impl Display for EnhancedForStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.declaration, self.expression)
    }
}

impl Display for ForControl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ForControl::Basic(basic) => write!(f, "{}", basic),
            ForControl::Enhanced(enhanced) => write!(f, "{}", enhanced),
        }
    }
}
